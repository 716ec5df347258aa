//! UI Primitives
//!
//! Styled building blocks shared by the dashboard components.

mod badge;
mod button;
mod card;
mod input;
mod table;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
pub use input::Input;
pub use table::{Table, TableBody, TableCell, TableHead, TableHeader, TableRow};

/// Join class lists, skipping empty entries
pub fn cn(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_skips_empty() {
        assert_eq!(cn(&["a b", "", "  ", " c "]), "a b c");
        assert_eq!(cn(&[]), "");
    }
}
