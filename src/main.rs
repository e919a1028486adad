use std::env;
use std::process::ExitCode;
use std::time::Duration;

use skin_price_resolver::PriceService;

#[tokio::main]
async fn main() -> ExitCode {
    pretty_env_logger::init();

    let names: Vec<String> = env::args().skip(1).collect();
    if names.is_empty() {
        eprintln!("usage: skin_price_resolver \"<item name>\" ...");
        return ExitCode::FAILURE;
    }

    let service = match PriceService::new() {
        Ok(service) => service,
        Err(err) => {
            eprintln!("failed to set up price service: {err}");
            return ExitCode::FAILURE;
        }
    };

    for name in &names {
        let quote = service.resolve(name).await;
        println!("{name}");
        if quote.has_any() {
            println!("  csfloat:  {}", format_price(quote.csfloat));
            println!("  skinswap: {}", format_price(quote.skinswap));
        } else {
            println!("  no listings found on either marketplace");
        }
    }

    if let Some(age) = service.catalog_age().await {
        println!("(catalog age: {})", format_age(age));
    }

    ExitCode::SUCCESS
}

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) => format!("${value:.2}"),
        None => "--".to_string(),
    }
}

fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else {
        format!("{}h", secs / 3600)
    }
}
