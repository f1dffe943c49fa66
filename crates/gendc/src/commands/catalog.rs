use colored::Colorize;

pub fn handle() {
    println!("{}", "利用可能なサービス:".bold());
    for name in gendc_core::catalog::names() {
        println!("  - {}", name.cyan());
    }
}
