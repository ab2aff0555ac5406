//! 内置的 Tailwind 冲突规则表
//!
//! 分组 id 形如 `category-property`。只有同一分组 id 的 token 才会冲突，
//! 不存在跨分组规则（`p-4` 不会移除 `px-2`）。

use crate::rules::{GroupRule, RuleSet, ValueMatcher};
use phf::phf_map;

/// 由完整类名直接确定分组的类
static STANDALONE_CLASSES: phf::Map<&'static str, &'static str> = phf_map! {
    // Display (显示)
    "block" => "layout-display",
    "inline-block" => "layout-display",
    "inline" => "layout-display",
    "flex" => "layout-display",
    "inline-flex" => "layout-display",
    "grid" => "layout-display",
    "inline-grid" => "layout-display",
    "contents" => "layout-display",
    "flow-root" => "layout-display",
    "list-item" => "layout-display",
    "table" => "layout-display",
    "table-row" => "layout-display",
    "table-cell" => "layout-display",
    "hidden" => "layout-display",

    // Position (定位)
    "static" => "layout-position",
    "fixed" => "layout-position",
    "absolute" => "layout-position",
    "relative" => "layout-position",
    "sticky" => "layout-position",

    // Visibility (可见性)
    "visible" => "layout-visibility",
    "invisible" => "layout-visibility",
    "collapse" => "layout-visibility",

    "box-border" => "layout-box-sizing",
    "box-content" => "layout-box-sizing",
    "isolate" => "layout-isolation",
    "isolation-auto" => "layout-isolation",

    // Typography (排版)
    "italic" => "typography-font-style",
    "not-italic" => "typography-font-style",
    "antialiased" => "typography-font-smoothing",
    "subpixel-antialiased" => "typography-font-smoothing",
    "underline" => "typography-text-decoration-line",
    "overline" => "typography-text-decoration-line",
    "line-through" => "typography-text-decoration-line",
    "no-underline" => "typography-text-decoration-line",
    "uppercase" => "typography-text-transform",
    "lowercase" => "typography-text-transform",
    "capitalize" => "typography-text-transform",
    "normal-case" => "typography-text-transform",
    "truncate" => "typography-text-overflow",
    "text-ellipsis" => "typography-text-overflow",
    "text-clip" => "typography-text-overflow",
    "text-wrap" => "typography-text-wrap",
    "text-nowrap" => "typography-text-wrap",
    "text-balance" => "typography-text-wrap",
    "text-pretty" => "typography-text-wrap",

    // Background (背景)
    "bg-fixed" => "bg-attachment",
    "bg-local" => "bg-attachment",
    "bg-scroll" => "bg-attachment",

    // Table (表格)
    "border-collapse" => "table-border-collapse",
    "border-separate" => "table-border-collapse",

    // Accessibility (无障碍)
    "sr-only" => "accessibility-screen-reader",
    "not-sr-only" => "accessibility-screen-reader",
};

/// 可在 static 中使用的 matcher 形式
enum M {
    Any,
    Bare,
    Kw(&'static [&'static str]),
    Num,
    Arb,
    ArbLen,
    ArbNum,
    ArbImg,
    Of(&'static [M]),
}

impl M {
    fn to_matcher(&self) -> ValueMatcher {
        match self {
            M::Any => ValueMatcher::Any,
            M::Bare => ValueMatcher::Bare,
            M::Kw(words) => ValueMatcher::keywords(words.iter().copied()),
            M::Num => ValueMatcher::Number,
            M::Arb => ValueMatcher::Arbitrary,
            M::ArbLen => ValueMatcher::ArbitraryLength,
            M::ArbNum => ValueMatcher::ArbitraryNumber,
            M::ArbImg => ValueMatcher::ArbitraryImage,
            M::Of(inner) => ValueMatcher::AnyOf {
                of: inner.iter().map(M::to_matcher).collect(),
            },
        }
    }
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const OVERFLOW: &[&str] = &["auto", "hidden", "clip", "visible", "scroll"];
const FLEX_DIRECTION: &[&str] = &["row", "row-reverse", "col", "col-reverse"];
const FLEX_WRAP: &[&str] = &["wrap", "wrap-reverse", "nowrap"];
const ALIGN_CONTENT: &[&str] = &[
    "normal", "center", "start", "end", "between", "around", "evenly", "baseline", "stretch",
];
const OBJECT_FIT: &[&str] = &["contain", "cover", "fill", "none", "scale-down"];
const BG_SIZE: &[&str] = &["auto", "cover", "contain"];
const BG_POSITION: &[&str] = &[
    "bottom", "center", "left", "left-bottom", "left-top", "right", "right-bottom", "right-top",
    "top",
];
const BG_REPEAT: &[&str] = &[
    "repeat", "no-repeat", "repeat-x", "repeat-y", "repeat-round", "repeat-space",
];
const LINE_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const SHADOW_SIZES: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];

const BARE_OR_ANY: M = M::Of(&[M::Bare, M::Any]);
const LINE_WIDTH: M = M::Of(&[M::Bare, M::Num, M::ArbLen]);

/// 有序的前缀规则：`(prefix, matcher, group)`
static PREFIX_RULES: &[(&str, M, &str)] = &[
    // Inset ring / shadow：必须在 `inset` 之前
    ("inset-ring", LINE_WIDTH, "effects-inset-ring-width"),
    ("inset-ring", M::Any, "color-inset-ring"),
    ("inset-shadow", M::Of(&[M::Bare, M::Kw(SHADOW_SIZES), M::Arb]), "effects-inset-shadow"),
    ("inset-shadow", M::Any, "color-inset-shadow"),
    // Layout (布局)
    ("inset-x", M::Any, "layout-inset-x"),
    ("inset-y", M::Any, "layout-inset-y"),
    ("inset", M::Any, "layout-inset"),
    ("top", M::Any, "layout-top"),
    ("right", M::Any, "layout-right"),
    ("bottom", M::Any, "layout-bottom"),
    ("left", M::Any, "layout-left"),
    ("start", M::Any, "layout-start"),
    ("end", M::Any, "layout-end"),
    ("z", M::Any, "layout-z-index"),
    ("overflow-x", M::Kw(OVERFLOW), "layout-overflow-x"),
    ("overflow-y", M::Kw(OVERFLOW), "layout-overflow-y"),
    ("overflow", M::Kw(OVERFLOW), "layout-overflow"),
    ("aspect", M::Any, "layout-aspect-ratio"),
    ("object", M::Kw(OBJECT_FIT), "layout-object-fit"),
    ("object", M::Any, "layout-object-position"),
    ("columns", M::Any, "layout-columns"),
    ("float", M::Any, "layout-float"),
    ("clear", M::Any, "layout-clear"),
    // Flexbox & Grid
    ("basis", M::Any, "flexbox-basis"),
    ("flex", M::Kw(FLEX_DIRECTION), "flexbox-direction"),
    ("flex", M::Kw(FLEX_WRAP), "flexbox-wrap"),
    ("flex", M::Any, "flexbox-flex"),
    ("grow", BARE_OR_ANY, "flexbox-grow"),
    ("shrink", BARE_OR_ANY, "flexbox-shrink"),
    ("order", M::Any, "flexbox-order"),
    ("grid-cols", M::Any, "grid-template-columns"),
    ("grid-rows", M::Any, "grid-template-rows"),
    ("col-span", M::Any, "grid-column-span"),
    ("row-span", M::Any, "grid-row-span"),
    ("gap-x", M::Any, "spacing-gap-x"),
    ("gap-y", M::Any, "spacing-gap-y"),
    ("gap", M::Any, "spacing-gap"),
    ("justify-items", M::Any, "flexbox-justify-items"),
    ("justify-self", M::Any, "flexbox-justify-self"),
    ("justify", M::Any, "flexbox-justify-content"),
    ("content", M::Kw(ALIGN_CONTENT), "flexbox-align-content"),
    ("items", M::Any, "flexbox-align-items"),
    ("self", M::Any, "flexbox-align-self"),
    ("place-content", M::Any, "flexbox-place-content"),
    ("place-items", M::Any, "flexbox-place-items"),
    ("place-self", M::Any, "flexbox-place-self"),
    // Spacing (间距)
    ("p", M::Any, "spacing-padding"),
    ("px", M::Any, "spacing-padding-x"),
    ("py", M::Any, "spacing-padding-y"),
    ("ps", M::Any, "spacing-padding-start"),
    ("pe", M::Any, "spacing-padding-end"),
    ("pt", M::Any, "spacing-padding-top"),
    ("pr", M::Any, "spacing-padding-right"),
    ("pb", M::Any, "spacing-padding-bottom"),
    ("pl", M::Any, "spacing-padding-left"),
    ("m", M::Any, "spacing-margin"),
    ("mx", M::Any, "spacing-margin-x"),
    ("my", M::Any, "spacing-margin-y"),
    ("ms", M::Any, "spacing-margin-start"),
    ("me", M::Any, "spacing-margin-end"),
    ("mt", M::Any, "spacing-margin-top"),
    ("mr", M::Any, "spacing-margin-right"),
    ("mb", M::Any, "spacing-margin-bottom"),
    ("ml", M::Any, "spacing-margin-left"),
    ("space-x", M::Kw(&["reverse"]), "spacing-space-x-reverse"),
    ("space-y", M::Kw(&["reverse"]), "spacing-space-y-reverse"),
    ("space-x", M::Any, "spacing-space-x"),
    ("space-y", M::Any, "spacing-space-y"),
    // Sizing (尺寸)
    ("size", M::Any, "sizing-size"),
    ("min-w", M::Any, "sizing-min-width"),
    ("max-w", M::Any, "sizing-max-width"),
    ("w", M::Any, "sizing-width"),
    ("min-h", M::Any, "sizing-min-height"),
    ("max-h", M::Any, "sizing-max-height"),
    ("h", M::Any, "sizing-height"),
    // Typography (排版)
    ("text-opacity", M::Any, "color-text-opacity"),
    ("text-shadow", M::Of(&[M::Bare, M::Kw(SHADOW_SIZES), M::Arb]), "typography-text-shadow"),
    ("text-shadow", M::Any, "color-text-shadow"),
    ("text", M::Kw(FONT_SIZES), "typography-font-size"),
    ("text", M::ArbLen, "typography-font-size"),
    ("text", M::Kw(TEXT_ALIGN), "typography-text-align"),
    ("text", M::Any, "color-text"),
    ("font", M::Kw(FONT_WEIGHTS), "typography-font-weight"),
    ("font", M::ArbNum, "typography-font-weight"),
    ("font", M::Any, "typography-font-family"),
    ("leading", M::Any, "typography-line-height"),
    ("tracking", M::Any, "typography-letter-spacing"),
    ("line-clamp", M::Any, "typography-line-clamp"),
    ("whitespace", M::Any, "typography-whitespace"),
    ("break", M::Kw(&["normal", "words", "all", "keep"]), "typography-word-break"),
    ("indent", M::Any, "typography-text-indent"),
    ("align", M::Any, "typography-vertical-align"),
    ("underline-offset", M::Any, "typography-underline-offset"),
    ("decoration", M::Kw(&["solid", "double", "dotted", "dashed", "wavy"]), "typography-decoration-style"),
    ("decoration", M::Of(&[M::Num, M::ArbLen, M::Kw(&["auto", "from-font"])]), "typography-decoration-thickness"),
    ("decoration", M::Any, "color-decoration"),
    ("list-image", M::Any, "typography-list-image"),
    ("list", M::Kw(&["inside", "outside"]), "typography-list-position"),
    ("list", M::Any, "typography-list-style-type"),
    // Background (背景) & 渐变
    ("bg-clip", M::Any, "bg-clip"),
    ("bg-origin", M::Any, "bg-origin"),
    ("bg-blend", M::Any, "effects-bg-blend"),
    ("bg-opacity", M::Any, "color-bg-opacity"),
    ("bg-gradient-to", M::Any, "bg-image"),
    ("bg-linear", M::Any, "bg-image"),
    ("bg-radial", BARE_OR_ANY, "bg-image"),
    ("bg-conic", BARE_OR_ANY, "bg-image"),
    ("bg", M::Of(&[M::Kw(&["none"]), M::ArbImg]), "bg-image"),
    ("bg", M::Kw(BG_SIZE), "bg-size"),
    ("bg", M::Kw(BG_POSITION), "bg-position"),
    ("bg", M::Kw(BG_REPEAT), "bg-repeat"),
    ("bg", M::Any, "color-bg"),
    ("from", M::Any, "gradient-from"),
    ("via", M::Any, "gradient-via"),
    ("to", M::Any, "gradient-to"),
    // Table (表格)：必须在 `border-*` 宽度和颜色规则之前
    ("border-spacing-x", M::Any, "table-border-spacing-x"),
    ("border-spacing-y", M::Any, "table-border-spacing-y"),
    ("border-spacing", M::Any, "table-border-spacing"),
    // Border (边框)
    ("border-opacity", M::Any, "color-border-opacity"),
    ("border-x", LINE_WIDTH, "border-width-x"),
    ("border-y", LINE_WIDTH, "border-width-y"),
    ("border-s", LINE_WIDTH, "border-width-start"),
    ("border-e", LINE_WIDTH, "border-width-end"),
    ("border-t", LINE_WIDTH, "border-width-top"),
    ("border-r", LINE_WIDTH, "border-width-right"),
    ("border-b", LINE_WIDTH, "border-width-bottom"),
    ("border-l", LINE_WIDTH, "border-width-left"),
    ("border-x", M::Any, "color-border-x"),
    ("border-y", M::Any, "color-border-y"),
    ("border-s", M::Any, "color-border-start"),
    ("border-e", M::Any, "color-border-end"),
    ("border-t", M::Any, "color-border-top"),
    ("border-r", M::Any, "color-border-right"),
    ("border-b", M::Any, "color-border-bottom"),
    ("border-l", M::Any, "color-border-left"),
    ("border", LINE_WIDTH, "border-width"),
    ("border", M::Kw(LINE_STYLES), "border-style"),
    ("border", M::Any, "color-border"),
    ("rounded-tl", BARE_OR_ANY, "border-radius-top-left"),
    ("rounded-tr", BARE_OR_ANY, "border-radius-top-right"),
    ("rounded-br", BARE_OR_ANY, "border-radius-bottom-right"),
    ("rounded-bl", BARE_OR_ANY, "border-radius-bottom-left"),
    ("rounded-ss", BARE_OR_ANY, "border-radius-start-start"),
    ("rounded-se", BARE_OR_ANY, "border-radius-start-end"),
    ("rounded-ee", BARE_OR_ANY, "border-radius-end-end"),
    ("rounded-es", BARE_OR_ANY, "border-radius-end-start"),
    ("rounded-t", BARE_OR_ANY, "border-radius-top"),
    ("rounded-r", BARE_OR_ANY, "border-radius-right"),
    ("rounded-b", BARE_OR_ANY, "border-radius-bottom"),
    ("rounded-l", BARE_OR_ANY, "border-radius-left"),
    ("rounded-s", BARE_OR_ANY, "border-radius-start"),
    ("rounded-e", BARE_OR_ANY, "border-radius-end"),
    ("rounded", BARE_OR_ANY, "border-radius"),
    ("outline-offset", M::Any, "outline-offset"),
    ("outline", LINE_WIDTH, "outline-width"),
    ("outline", M::Kw(LINE_STYLES), "outline-style"),
    ("outline", M::Any, "color-outline"),
    ("ring-offset", M::Of(&[M::Num, M::ArbLen]), "ring-offset-width"),
    ("ring-offset", M::Any, "color-ring-offset"),
    ("ring-opacity", M::Any, "color-ring-opacity"),
    ("ring", M::Kw(&["inset"]), "ring-inset"),
    ("ring", LINE_WIDTH, "ring-width"),
    ("ring", M::Any, "color-ring"),
    // Effects & Filters (效果)
    ("shadow", M::Of(&[M::Bare, M::Kw(SHADOW_SIZES), M::Arb]), "effects-shadow"),
    ("shadow", M::Any, "color-shadow"),
    ("opacity", M::Any, "effects-opacity"),
    ("mix-blend", M::Any, "effects-mix-blend"),
    ("drop-shadow", BARE_OR_ANY, "filter-drop-shadow"),
    ("blur", BARE_OR_ANY, "filter-blur"),
    ("brightness", M::Any, "filter-brightness"),
    ("contrast", M::Any, "filter-contrast"),
    ("grayscale", BARE_OR_ANY, "filter-grayscale"),
    ("invert", BARE_OR_ANY, "filter-invert"),
    // SVG
    ("fill", M::Any, "color-fill"),
    ("stroke", M::Of(&[M::Num, M::ArbLen, M::ArbNum]), "svg-stroke-width"),
    ("stroke", M::Any, "color-stroke"),
    ("accent", M::Any, "color-accent"),
    ("caret", M::Any, "color-caret"),
    // Transforms (变换)
    ("rotate-x", M::Any, "transform-rotate-x"),
    ("rotate-y", M::Any, "transform-rotate-y"),
    ("rotate", M::Any, "transform-rotate"),
    ("scale-x", M::Any, "transform-scale-x"),
    ("scale-y", M::Any, "transform-scale-y"),
    ("scale", M::Any, "transform-scale"),
    ("translate-x", M::Any, "transform-translate-x"),
    ("translate-y", M::Any, "transform-translate-y"),
    ("skew-x", M::Any, "transform-skew-x"),
    ("skew-y", M::Any, "transform-skew-y"),
    ("origin", M::Any, "transform-origin"),
    // Transitions & Animation (过渡与动画)
    ("transition", BARE_OR_ANY, "transition-property"),
    ("duration", M::Any, "transition-duration"),
    ("ease", M::Any, "transition-timing-function"),
    ("delay", M::Any, "transition-delay"),
    ("animate", M::Any, "animation"),
    // Interactivity (交互)
    ("cursor", M::Any, "interactivity-cursor"),
    ("pointer-events", M::Kw(&["none", "auto"]), "interactivity-pointer-events"),
    ("select", M::Kw(&["none", "text", "all", "auto"]), "interactivity-user-select"),
    ("resize", M::Of(&[M::Bare, M::Kw(&["none", "x", "y"])]), "interactivity-resize"),
    ("touch", M::Kw(&["pan-x", "pan-left", "pan-right"]), "interactivity-touch-x"),
    ("touch", M::Kw(&["pan-y", "pan-up", "pan-down"]), "interactivity-touch-y"),
    ("touch", M::Kw(&["pinch-zoom"]), "interactivity-touch-pinch-zoom"),
    ("touch", M::Any, "interactivity-touch-action"),
    ("will-change", M::Any, "interactivity-will-change"),
];

impl Default for RuleSet {
    /// 内置规则表
    fn default() -> Self {
        let mut standalone: Vec<(&str, &str)> =
            STANDALONE_CLASSES.entries().map(|(k, v)| (*k, *v)).collect();
        // phf 的遍历顺序是哈希顺序
        standalone.sort_unstable();

        Self {
            standalone: standalone
                .into_iter()
                .map(|(class, group)| (class.to_string(), group.to_string()))
                .collect(),
            rules: PREFIX_RULES
                .iter()
                .map(|(prefix, matcher, group)| GroupRule::new(*prefix, matcher.to_matcher(), *group))
                .collect(),
        }
    }
}
