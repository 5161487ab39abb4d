use crate::page::HostPage;

pub const TAGLINE: &str = "Tap Blink whenever you want to reset your attention.";

pub const ANIMATE_CLASS: &str = "blink-animate";

pub const ANIMATION_CSS: &str = r#"
.blink-animate {
  animation: blink-pop 260ms ease-out;
}
@keyframes blink-pop {
  0% { transform: translateY(4px) scale(0.96); opacity: 0; }
  60% { transform: translateY(0) scale(1.02); opacity: 1; }
  100% { transform: translateY(0) scale(1); opacity: 1; }
}
"#;

pub fn inject_animation<P: HostPage>(page: &mut P) {
    page.inject_style(ANIMATION_CSS);
}

pub fn format_count_label(count: u64) -> String {
    match count {
        0 => "0 blinks".to_string(),
        1 => "1 blink".to_string(),
        n => format!("{n} blinks"),
    }
}
