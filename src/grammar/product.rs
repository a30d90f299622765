//! `User-Agent` and `Server`.
use super::{FormatError, HeaderReader, HeaderWriter, ParseError};
use crate::data::Product;

/// Read a space separated product list, e.g: `Mozilla/5.0 (X11; Linux x86_64) Firefox/96.0`.
///
/// A comment belongs to the product before it.
///
/// ```not_rust
/// product-list = 1*( product | comment )
/// product      = token ["/" product-version]
/// ```
pub fn read_products(value: &str) -> Result<Vec<Product>, ParseError> {
    let mut reader = HeaderReader::new(value);
    let mut products: Vec<Product> = Vec::new();

    loop {
        reader.skip_spaces();
        match reader.peek() {
            None => break,
            Some(b'(') => {
                let position = reader.position();
                let comment = reader.read_comment()?;
                let Some(product) = products.last_mut() else {
                    return Err(ParseError::new(super::ParseErrorKind::Malformed, position, Some(b'(')));
                };
                match &mut product.comment {
                    Some(existing) => {
                        existing.push(' ');
                        existing.push_str(&comment);
                    }
                    None => product.comment = Some(comment),
                }
            }
            Some(_) => {
                let Some(name) = reader.read_token() else {
                    return Err(reader.unexpected());
                };
                let mut product = Product::new(name);
                if reader.peek() == Some(b'/') {
                    reader.read();
                    match reader.read_token() {
                        Some(version) => product.version = Some(version.to_owned()),
                        None => return Err(reader.unexpected()),
                    }
                }
                products.push(product);
            }
        }
    }

    Ok(products)
}

/// Write a space separated product list.
pub fn write_products(products: &[Product]) -> Result<String, FormatError> {
    let mut writer = HeaderWriter::new();
    for product in products {
        if !writer.is_empty() {
            writer.append_char(' ');
        }
        writer.append_token(&product.name)?;
        if let Some(version) = &product.version {
            writer.append_char('/').append_token(version)?;
        }
        if let Some(comment) = &product.comment {
            writer.append_char(' ').append_comment(comment);
        }
    }
    Ok(writer.into_string())
}
