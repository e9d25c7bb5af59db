// Decorator demo: a text source wrapped by sanitize and crypto layers.
// The client code works with the chain only through the DataSource trait.

use realworld_patterns::decorator::{
    CryptoDecorator, DataSource, SanitizeDecorator, TextDataSource,
};

fn main() {
    let source = TextDataSource;
    let sanitized = SanitizeDecorator::new(Box::new(source));
    let encrypted = CryptoDecorator::new(Box::new(sanitized));

    println!("Final text is:");
    println!("{}", encrypted.get_data());
}
