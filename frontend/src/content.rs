use yew::AttrValue;

use crate::components::accordion::AccordionItem;
use crate::components::carousel::Slide;
use crate::components::ticker::Logo;

pub const STUDIO: &str = "Alvion";
pub const CONTACT_EMAIL: &str = "hello@alvion.studio";

pub const HERO_TITLE: &str = "Design that earns attention";
pub const HERO_SUBTITLE: &str =
    "Independent brand and product design studio. Identities, websites and interfaces for teams who care about the details.";

pub const WHY_ME_STATEMENT: &str =
    "I work directly with every client, from first sketch to final pixel. No account managers, no handoffs, just one designer who knows your project inside out and ships on time.";

pub struct Service {
    pub title: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Brand identity",
        text: "Logos, type systems and color palettes built to hold up across every touchpoint.",
        icon: "/assets/icons/identity.svg",
    },
    Service {
        title: "Web design",
        text: "Marketing sites and landing pages that read clearly on any screen.",
        icon: "/assets/icons/web.svg",
    },
    Service {
        title: "Product UI",
        text: "Interfaces for apps and dashboards, from flows to a documented component kit.",
        icon: "/assets/icons/product.svg",
    },
    Service {
        title: "Art direction",
        text: "Photography and illustration briefs that keep campaigns consistent.",
        icon: "/assets/icons/direction.svg",
    },
    Service {
        title: "Packaging",
        text: "Labels and boxes designed for the shelf and the unboxing.",
        icon: "/assets/icons/packaging.svg",
    },
    Service {
        title: "Design systems",
        text: "Tokens, guidelines and libraries your team can extend without me.",
        icon: "/assets/icons/system.svg",
    },
];

pub fn references() -> Vec<AccordionItem> {
    [
        ("Nordlys Coffee", "Brand identity, packaging", "A full rebrand for a roastery expanding into retail. The new identity launched across forty stores within a quarter.", "/assets/references/nordlys.jpg"),
        ("Kinetic Health", "Product UI", "Redesigned the patient app around three core tasks. Support tickets dropped by a third after launch.", "/assets/references/kinetic.jpg"),
        ("Oro Architects", "Web design, art direction", "A portfolio site where the buildings do the talking. Built around large imagery and a quiet grid.", "/assets/references/oro.jpg"),
        ("Fjell Outdoor", "Design system", "A shared component library for web and retail displays, now maintained by their in-house team.", "/assets/references/fjell.jpg"),
    ]
    .into_iter()
    .map(|(title, subtitle, body, image)| AccordionItem {
        title: AttrValue::Static(title),
        subtitle: AttrValue::Static(subtitle),
        body: AttrValue::Static(body),
        image: Some(AttrValue::Static(image)),
    })
    .collect()
}

pub fn reasons() -> Vec<Slide> {
    [
        ("One point of contact", "You talk to the person doing the work, every time.", "/assets/why/contact.jpg"),
        ("Fixed scope, fixed price", "A clear proposal up front. No surprise invoices.", "/assets/why/price.jpg"),
        ("Built to hand over", "Every file is organized and documented for your team.", "/assets/why/handover.jpg"),
        ("Fast turnaround", "First concepts within a week of kickoff.", "/assets/why/speed.jpg"),
    ]
    .into_iter()
    .map(|(title, text, image)| Slide {
        title: AttrValue::Static(title),
        text: AttrValue::Static(text),
        image: AttrValue::Static(image),
    })
    .collect()
}

pub fn sponsors() -> Vec<Logo> {
    ["Nordlys", "Kinetic", "Oro", "Fjell", "Lumen", "Vela", "Brisk", "Halden"]
        .into_iter()
        .map(|name| Logo {
            name: AttrValue::Static(name),
            src: AttrValue::from(format!("/assets/sponsors/{}.svg", name.to_lowercase())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reference_has_an_image() {
        assert!(references().iter().all(|r| r.image.is_some()));
    }

    #[test]
    fn sponsor_assets_are_lowercase() {
        let logos = sponsors();
        assert_eq!(logos.len(), 8);
        assert_eq!(logos[0].src.as_str(), "/assets/sponsors/nordlys.svg");
    }
}
