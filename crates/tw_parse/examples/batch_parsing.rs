//! 打印空格分隔的 class 列表中每个类名的结构
//!
//! cargo run -p tailmerge-tw-parse --example batch_parsing -- "md:hover:p-4 -m-2 w-1/2"

use tailmerge_tw_parse::parse_class;

fn main() {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "p-4 hover:bg-blue-500 md:text-center -m-2 w-[13px] !font-bold".to_string());

    for class in input.split_whitespace() {
        match parse_class(class) {
            Ok(parsed) => {
                println!("{}", class);
                println!("    utility:   {}", parsed.utility);
                if !parsed.modifiers.is_empty() {
                    println!("    modifiers: {:?}", parsed.modifiers);
                    println!("    key:       {}", parsed.modifier_key());
                }
                if let Some(postfix) = &parsed.postfix {
                    println!("    postfix:   {}", postfix);
                }
                if parsed.negative {
                    println!("    negative");
                }
                if parsed.important {
                    println!("    important");
                }
            }
            Err(err) => println!("{}\n    error: {}", class, err),
        }
    }
}
