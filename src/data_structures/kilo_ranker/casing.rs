// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Case restoration for resolved words.

/// Applies the capitalisation of `original` to `resolved`.
///
/// Position by position, a character of `resolved` is uppercased when the
/// character of `original` at the same position is uppercase and lowercased
/// otherwise (wildcards and punctuation count as lowercase). Characters of
/// `resolved` past the end of `original` are lowercased.
///
/// # Example
///
/// ```
/// use olelo_lib::data_structures::kilo_ranker::restore_case;
///
/// assert_eq!(restore_case("C*T", "cat"), "CaT");
/// assert_eq!(restore_case("Ne*s", "news"), "News");
/// ```
pub fn restore_case(original: &str, resolved: &str) -> String {
    let mut result = String::with_capacity(resolved.len());
    let mut pattern = original.chars();

    for c in resolved.chars() {
        match pattern.next() {
            Some(o) if o.is_uppercase() => result.extend(c.to_uppercase()),
            _ => result.extend(c.to_lowercase()),
        }
    }

    result
}
