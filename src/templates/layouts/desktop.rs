use crate::templates::components::steps_header;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f3f4f6; color: #111827; }
main { max-width: 1200px; margin: 0 auto; padding: 2rem 1rem; }
.steps { display: flex; gap: 1rem; justify-content: center; padding: 1rem; background: #fff; box-shadow: 0 1px 3px #0002; flex-wrap: wrap; }
.step { display: flex; flex-direction: column; align-items: center; color: #9ca3af; font-size: .85rem; }
.step.active { color: #2563eb; font-weight: 600; }
.step.completed { color: #059669; }
.toolbar { display: flex; justify-content: space-between; align-items: center; gap: 1rem; flex-wrap: wrap; background: #fff; border-radius: 1rem; padding: 1rem 1.5rem; margin-bottom: 2rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1.5rem; margin-bottom: 2rem; }
.skip-card { background: #fff; border-radius: 1rem; border: 1px solid #e5e7eb; overflow: hidden; position: relative; }
.skip-card.selected { outline: 2px solid #3b82f6; }
.skip-card img, .skip-placeholder { width: 100%; height: 160px; object-fit: cover; }
.skip-placeholder { display: flex; align-items: center; justify-content: center; background: #e5e7eb; font-weight: 700; text-align: center; }
.hidden { display: none; }
.badge { display: inline-block; padding: .15rem .6rem; border-radius: 999px; font-size: .75rem; background: #eef2ff; }
.badge.warning { background: #fef3c7; color: #92400e; }
.size-small { background: #dbeafe; } .size-medium { background: #d1fae5; } .size-large { background: #ede9fe; } .size-xl { background: #ffedd5; }
.card-body { padding: 1rem; }
.price { font-size: 1.5rem; font-weight: 700; color: #2563eb; }
.summary { background: #fff; border-radius: 1rem; padding: 1.5rem; box-shadow: 0 4px 12px #0001; }
.breakdown div { display: flex; justify-content: space-between; font-size: .85rem; }
.notice { text-align: center; max-width: 28rem; margin: 4rem auto; }
button { cursor: pointer; border: none; border-radius: .6rem; padding: .6rem 1.2rem; background: #2563eb; color: #fff; font-weight: 600; }
button.secondary { background: #e5e7eb; color: #374151; }
"#;

/// Page shell. `auto_refresh` re-polls while a catalog load is outstanding.
pub fn desktop_layout(title: &str, auto_refresh: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if auto_refresh {
                    meta http-equiv="refresh" content="1";
                }
                title { (title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                (steps_header())
                (content)
            }
        }
    }
}
