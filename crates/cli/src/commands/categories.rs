use anyhow::Result;

use a11y_audit::requirements::CATEGORIES;

pub fn run() -> Result<()> {
    println!("{:<16} {:<26} Keywords", "Category", "Bucket");
    println!("{}", "-".repeat(72));

    for category in CATEGORIES {
        println!(
            "{:<16} {:<26} {}",
            category.label,
            category.bucket.title(),
            category.keywords.join(", ")
        );
    }

    println!("\nTotal: {} categories", CATEGORIES.len());
    Ok(())
}
