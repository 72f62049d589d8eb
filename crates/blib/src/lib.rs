//! blib — deuxième bibliothèque collaboratrice du smoke test.
//! Même contrat qu'`alib`, ligne différente.

#![forbid(unsafe_code)]

use std::io::{self, Write};

/// Ligne fixe émise par cette bibliothèque.
pub const BLIB_LINE: &str = "Hello from blib.";

/// Écrit la ligne de blib (terminée par `\n`) sur `out`.
pub fn write_line<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{BLIB_LINE}")
}

/// Imprime la ligne de blib sur stdout.
pub fn print_from_blib() {
    println!("{BLIB_LINE}");
}
