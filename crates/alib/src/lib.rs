//! alib — première bibliothèque collaboratrice du smoke test.
//!
//! Une seule capacité : émettre sa ligne fixe. La variante `write_line`
//! prend un `Write` générique pour rester testable sans capturer stdout.

#![forbid(unsafe_code)]

use std::io::{self, Write};

/// Ligne fixe émise par cette bibliothèque. Le contenu exact est libre,
/// seule sa stabilité compte (sortie identique à chaque exécution).
pub const ALIB_LINE: &str = "Hello from alib.";

/// Écrit la ligne d'alib (terminée par `\n`) sur `out`.
pub fn write_line<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{ALIB_LINE}")
}

/// Imprime la ligne d'alib sur stdout.
pub fn print_from_alib() {
    println!("{ALIB_LINE}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_line_emits_the_fixed_line_with_newline() {
        let mut buf = Vec::new();
        write_line(&mut buf).expect("write ok");
        assert_eq!(buf, format!("{ALIB_LINE}\n").into_bytes());
    }

    #[test]
    fn line_is_stable_across_calls() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        write_line(&mut a).unwrap();
        write_line(&mut b).unwrap();
        assert_eq!(a, b);
    }
}
