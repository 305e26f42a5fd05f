//! Static agency content shown in each section

/// Heading shared by the content sections: plain part, highlighted part, blurb
#[derive(Debug, Clone, Copy)]
pub struct Heading {
    pub plain: &'static str,
    pub highlight: &'static str,
    pub blurb: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

#[derive(Debug, Clone, Copy)]
pub struct Work {
    pub name: &'static str,
    pub description: &'static str,
    pub live_url: &'static str,
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub rating: u8,
    pub review: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub title: &'static str,
    pub content: &'static str,
    /// None when the entry is not a link
    pub href: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const BRAND: &str = "Apexweb";

pub const HERO_BADGE: &str = "We Strive To Become No. 1 Digital Agency";
pub const HERO: Heading = Heading {
    plain: "Transforming Ideas into ",
    highlight: "Powerful Code",
    blurb: "We specialize in creating seamless user experiences through cutting-edge web \
            development, mobile applications, and innovative UI/UX design solutions.",
};
pub const HERO_CALL_TO_ACTION: &str = "Get in Touch";

pub const ABOUT: Heading = Heading {
    plain: "Crafting Digital Excellence ",
    highlight: "Since 2021",
    blurb: "",
};
pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "We are a passionate team of developers, designers, and strategists dedicated to \
     transforming your vision into powerful digital solutions. Our expertise spans across \
     modern web technologies, mobile development, and user experience design.",
    "From concept to deployment, we prioritize client collaboration, fostering open \
     communication to ensure every project exceeds expectations and delivers measurable \
     results.",
];

pub const SERVICES_HEADING: Heading = Heading {
    plain: "Our ",
    highlight: "Services",
    blurb: "We offer comprehensive digital solutions to help your business thrive in the \
            modern landscape",
};
pub const SERVICES: [Service; 3] = [
    Service {
        title: "Web Development",
        description: "Custom web applications built with modern frameworks like React, \
                      Next.js, and TypeScript for optimal performance and scalability.",
        features: [
            "Responsive Design",
            "SEO Optimized",
            "Performance Focused",
            "Modern Technologies",
        ],
    },
    Service {
        title: "Mobile Development",
        description: "Native and cross-platform mobile applications that deliver exceptional \
                      user experiences across iOS and Android devices.",
        features: [
            "Cross-Platform",
            "Native Performance",
            "App Store Ready",
            "Offline Support",
        ],
    },
    Service {
        title: "AI Agent",
        description: "Intelligent virtual assistants that automate tasks, enhance \
                      productivity, and deliver personalized user interactions across \
                      platforms.",
        features: [
            "Natural Language Processing",
            "Task Automation",
            "Context Awareness",
            "Multi-platform Support",
        ],
    },
];

pub const WORKS_HEADING: Heading = Heading {
    plain: "Our ",
    highlight: "Previous Works",
    blurb: "Explore our portfolio of successful projects and see how we've helped businesses \
            transform their digital presence.",
};
pub const WORKS: [Work; 4] = [
    Work {
        name: "Smart Dentist",
        description: "A modern dental practice Website.",
        live_url: "https://smartdentist.netlify.app/",
        technologies: &["React", "Tailwind CSS", "Netlify"],
    },
    Work {
        name: "Mezan Masterflow",
        description: "A Premium multi-handyman service website.",
        live_url: "https://mezan-masterflow.vercel.app/",
        technologies: &["Next.js", "TypeScript", "Vercel"],
    },
    Work {
        name: "Talos Roof Guard",
        description: "Roof inspection and maintenance service Website.",
        live_url: "https://talos-roof-guard.vercel.app/",
        technologies: &["React", "Vercel"],
    },
    Work {
        name: "SSC Carpentry",
        description: "Showcase website for a premium carpentry service with portfolio gallery \
                      and quote requests.",
        live_url: "https://ssccarpentry.netlify.app/",
        technologies: &["HTML/CSS", "JavaScript", "Netlify"],
    },
];

pub const TESTIMONIALS_HEADING: Heading = Heading {
    plain: "What Our ",
    highlight: "Clients Say",
    blurb: "Don't just take our word for it. Here's what our satisfied clients have to say \
            about working with us.",
};
pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "CEO, TechStart Inc.",
        rating: 5,
        review: "Apexweb transformed our vision into a stunning reality. Their attention to \
                 detail and technical expertise exceeded our expectations. The team delivered \
                 a scalable solution that has significantly boosted our business growth.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Product Manager, InnovateLab",
        rating: 5,
        review: "Working with Apexweb was an absolute pleasure. They understood our complex \
                 requirements and delivered a solution that not only met but exceeded our \
                 goals. Their communication throughout the project was exceptional.",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Founder, CreativeSpace",
        rating: 5,
        review: "The level of professionalism and creativity that Apexweb brings to every \
                 project is remarkable. They helped us build a platform that our users \
                 absolutely love. Highly recommended for any serious development work.",
    },
    Testimonial {
        name: "David Thompson",
        role: "CTO, DataFlow Systems",
        rating: 5,
        review: "Apexweb delivered a robust, scalable solution that has been running \
                 flawlessly for over a year. Their code quality is exceptional, and their \
                 post-launch support has been outstanding. True professionals.",
    },
    Testimonial {
        name: "Lisa Wang",
        role: "Marketing Director, BrandBoost",
        rating: 5,
        review: "From concept to deployment, Apexweb made the entire process seamless. Their \
                 innovative approach and technical skills helped us launch ahead of schedule. \
                 The results speak for themselves - our engagement rates have tripled.",
    },
    Testimonial {
        name: "James Wilson",
        role: "Startup Founder, NextGen Solutions",
        rating: 5,
        review: "Apexweb turned our ambitious idea into a market-ready product. Their \
                 expertise in modern technologies and user experience design helped us secure \
                 our first round of funding. Exceptional work!",
    },
];

pub const CONTACT_HEADING: Heading = Heading {
    plain: "Let's Build Something ",
    highlight: "Amazing Together",
    blurb: "Ready to transform your ideas into reality? Get in touch and let's discuss your \
            next project",
};
pub const CONTACT_INTRO: &str = "We'd love to hear from you. Whether you have a project in \
                                 mind or just want to chat about possibilities, don't \
                                 hesitate to reach out.";
pub const CONTACT_INFO: [ContactInfo; 3] = [
    ContactInfo {
        title: "Email",
        content: "apexweb19@gmail.com",
        href: Some("mailto:apexweb19@gmail.com"),
    },
    ContactInfo {
        title: "Whatsapp",
        content: "+1(956) 246-3140",
        href: Some("https://wa.me/19562463140"),
    },
    ContactInfo {
        title: "Location",
        content: "USA, UK & Canada",
        href: None,
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Instagram",
        href: "https://instagram.com",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
    },
    SocialLink {
        label: "X",
        href: "https://x.com/Apexwebagency",
    },
];

pub const SUBMITTED_FALLBACK: &str = "Thank you for reaching out. We'll get back to you soon.";

/// Footer copyright line for `year`
pub fn copyright(year: i32) -> String {
    format!("© {year} {BRAND} Agency. All rights reserved.")
}

/// Selectable entries of the Contact section: info entries, then socials
pub fn contact_link_count() -> usize {
    CONTACT_INFO.len() + SOCIAL_LINKS.len()
}

/// Label and link of the `index`th selectable Contact entry
pub fn contact_link(index: usize) -> Option<(&'static str, Option<&'static str>)> {
    if let Some(info) = CONTACT_INFO.get(index) {
        return Some((info.title, info.href));
    }
    SOCIAL_LINKS
        .get(index - CONTACT_INFO.len())
        .map(|social| (social.label, Some(social.href)))
}
