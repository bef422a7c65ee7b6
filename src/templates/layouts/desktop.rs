use crate::db::preferences::Theme;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, theme: Theme, content: Markup) -> Markup {
    let theme_class = match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
        Theme::System => "system",
    };

    html! {
        (DOCTYPE)
        html class=(theme_class) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Digital Guarantee Locker" }
                link rel="stylesheet" href="main.css";
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  h3 { "Digital Guarantee Locker" }
                  nav {
                      ul {
                          li { a href="dashboard.html" { "Dashboard" } }
                          li { a href="guarantees.html" { "My Guarantees" } }
                          li { a href="reminders.html" { "Reminders" } }
                      }
                  }
              }
                (content)
            }
        }
    }
}
