//! 演示图标组件如何把自身的基础 class 与调用方的覆盖 class 合并
//!
//! cargo run -p tailmerge-core --example override_demo -- "h-4 w-4 text-blue-600"

use tailmerge_core::{apply_override, conflict_key, RuleSet};

const ICON_BASE: &str = "inline-block h-6 w-6 shrink-0 fill-current text-gray-500";

fn main() {
    let override_classes = std::env::args().nth(1);
    let rules = RuleSet::default();

    println!("base:     {}", ICON_BASE);
    println!("override: {}", override_classes.as_deref().unwrap_or("(none)"));
    println!();

    for token in ICON_BASE
        .split_whitespace()
        .chain(override_classes.iter().flat_map(|o| o.split_whitespace()))
    {
        println!("  {:<24} {:?}", token, conflict_key(&rules, token));
    }

    println!();
    println!(
        "result:   {}",
        apply_override(ICON_BASE, override_classes.as_deref())
    );
}
