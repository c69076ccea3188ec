// Scroll-triggered entrance animations, expressed as data so the web layer
// only has to turn each row into a tween.

/// Starting offset an element animates *from* (always alongside opacity 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    X(f64),
    Y(f64),
    /// Horizontal slide whose side alternates: even indices come from the left.
    AlternatingX(f64),
    Scale(f64),
}

impl Offset {
    /// Tween property and value for the element at `index`.
    pub fn for_index(&self, index: usize) -> (&'static str, f64) {
        match *self {
            Offset::X(v) => ("x", v),
            Offset::Y(v) => ("y", v),
            Offset::AlternatingX(v) => {
                let v = v.abs();
                ("x", if index % 2 == 0 { -v } else { v })
            }
            Offset::Scale(v) => ("scale", v),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DelayRule {
    None,
    /// `index * step`
    Step(f64),
    /// `(index % period) * step`, restarting per visual row.
    Cycle { period: usize, step: f64 },
}

impl DelayRule {
    pub fn delay_for(&self, index: usize) -> f64 {
        match *self {
            DelayRule::None => 0.0,
            DelayRule::Step(step) => index as f64 * step,
            DelayRule::Cycle { period, step } if period > 0 => (index % period) as f64 * step,
            DelayRule::Cycle { .. } => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub selector: &'static str,
    /// ScrollTrigger `start` (element edge, viewport edge).
    pub start: &'static str,
    pub from: Offset,
    pub duration: f64,
    pub delay: DelayRule,
    pub ease: &'static str,
}

const POWER3_OUT: &str = "power3.out";
const TOP_80: &str = "top 80%";
const TOP_85: &str = "top 85%";

const fn card(selector: &'static str, delay: DelayRule) -> Reveal {
    Reveal {
        selector,
        start: TOP_80,
        from: Offset::Y(50.0),
        duration: 0.8,
        delay,
        ease: POWER3_OUT,
    }
}

const ROW_OF_THREE: DelayRule = DelayRule::Cycle {
    period: 3,
    step: 0.1,
};

pub const REVEALS: &[Reveal] = &[
    card(".section-title", DelayRule::None),
    Reveal {
        selector: ".about-text h3",
        start: TOP_80,
        from: Offset::X(-50.0),
        duration: 0.8,
        delay: DelayRule::None,
        ease: POWER3_OUT,
    },
    card(".stat-card", DelayRule::Step(0.1)),
    card(".portfolio-item", ROW_OF_THREE),
    card(".service-card", ROW_OF_THREE),
    Reveal {
        selector: ".tech-item",
        start: TOP_85,
        from: Offset::Scale(0.8),
        duration: 0.6,
        delay: DelayRule::Cycle {
            period: 4,
            step: 0.05,
        },
        ease: "back.out",
    },
    card(".testimonial-card", ROW_OF_THREE),
    card(".step-card", DelayRule::Step(0.1)),
    card(".blog-card", ROW_OF_THREE),
    Reveal {
        selector: ".form-group",
        start: TOP_85,
        from: Offset::Y(30.0),
        duration: 0.6,
        delay: DelayRule::Step(0.05),
        ease: POWER3_OUT,
    },
    Reveal {
        selector: ".info-card",
        start: TOP_80,
        from: Offset::AlternatingX(50.0),
        duration: 0.8,
        delay: DelayRule::Step(0.1),
        ease: POWER3_OUT,
    },
    Reveal {
        selector: ".portfolio-image img, .blog-image",
        start: TOP_80,
        from: Offset::Scale(0.9),
        duration: 1.0,
        delay: DelayRule::None,
        ease: POWER3_OUT,
    },
];

/// Paragraphs revealed together as one staggered batch.
pub const ABOUT_PARAGRAPHS: &str = ".about-text p";
pub const ABOUT_PARAGRAPH_STAGGER: f64 = 0.1;

/// One step of the hero intro timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroStep {
    pub selector: &'static str,
    pub y: f64,
    /// Timeline position parameter; `None` appends after the previous step.
    pub position: Option<&'static str>,
}

pub const HERO_STEP_DURATION: f64 = 0.8;

pub const HERO_STEPS: &[HeroStep] = &[
    HeroStep {
        selector: ".hero-text h1",
        y: 50.0,
        position: None,
    },
    HeroStep {
        selector: ".hero-subtitle",
        y: 30.0,
        position: Some("-=0.6"),
    },
    HeroStep {
        selector: ".hero-buttons",
        y: 30.0,
        position: Some("-=0.6"),
    },
];
