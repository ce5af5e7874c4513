//! Page templates, compiled into the binary.

use minijinja::Environment;

const TEMPLATES: [(&str, &str); 5] = [
    ("base.html", include_str!("../templates/base.html")),
    ("nav.html", include_str!("../templates/nav.html")),
    ("explore.html", include_str!("../templates/explore.html")),
    ("graphs.html", include_str!("../templates/graphs.html")),
    ("table.html", include_str!("../templates/table.html")),
];

/// Build the template environment. `.html` templates auto-escape.
pub fn build_environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_all_templates_parse() {
        let env = build_environment().unwrap();
        for (name, _) in TEMPLATES {
            assert!(env.get_template(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_explore_escapes_values() {
        let env = build_environment().unwrap();
        let html = env
            .get_template("explore.html")
            .unwrap()
            .render(context! {
                label => "<script>alert(1)</script>",
                rows => Vec::<()>::new(),
                locations => Vec::<()>::new(),
                sub_locations => Vec::<()>::new(),
                pollutants => Vec::<()>::new(),
                selected => context! { main_location => "" },
                query_string => "",
            })
            .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
