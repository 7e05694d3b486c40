use once_cell::sync::Lazy;

use crate::layout::resolver::LayoutTable;

// Embedded at compile time; a table that fails to parse is a build defect,
// caught by the tests below.
fn builtin(name: &str, source: &str) -> LayoutTable {
    LayoutTable::from_json(name, source).unwrap_or_else(|err| panic!("{}", err))
}

pub static HERO: Lazy<LayoutTable> =
    Lazy::new(|| builtin("hero", include_str!("../../layouts/hero.json")));

pub static SERVICES: Lazy<LayoutTable> =
    Lazy::new(|| builtin("services", include_str!("../../layouts/services.json")));

pub static WHY_ME: Lazy<LayoutTable> =
    Lazy::new(|| builtin("why_me", include_str!("../../layouts/why_me.json")));

pub static CONTACT: Lazy<LayoutTable> =
    Lazy::new(|| builtin("contact", include_str!("../../layouts/contact.json")));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::breakpoint::Breakpoint;
    use crate::layout::resolver::LayoutValue;

    fn all() -> [&'static LayoutTable; 4] {
        [&*HERO, &*SERVICES, &*WHY_ME, &*CONTACT]
    }

    #[test]
    fn every_table_covers_every_breakpoint() {
        for table in all() {
            for breakpoint in Breakpoint::ALL {
                let set = table.resolve(breakpoint).unwrap();
                assert!(!set.is_empty(), "{} at {}", table.name(), breakpoint);
            }
        }
    }

    #[test]
    fn tables_share_keys_across_breakpoints() {
        for table in all() {
            let reference: Vec<String> = table
                .resolve(Breakpoint::Desktop)
                .unwrap()
                .iter()
                .map(|(k, _)| k.to_string())
                .collect();
            for breakpoint in Breakpoint::ALL {
                let keys: Vec<String> = table
                    .resolve(breakpoint)
                    .unwrap()
                    .iter()
                    .map(|(k, _)| k.to_string())
                    .collect();
                assert_eq!(keys, reference, "{} at {}", table.name(), breakpoint);
            }
        }
    }

    #[test]
    fn hero_desktop_values() {
        let set = HERO.resolve(Breakpoint::Desktop).unwrap();
        assert_eq!(set.get("title.top"), Some(&LayoutValue::Px(180.0)));
        assert_eq!(set.css("title.font-size").as_deref(), Some("5rem"));
        assert_eq!(set.css("portrait.width").as_deref(), Some("440px"));
    }
}
