//! clib — troisième bibliothèque collaboratrice, utilisée uniquement par
//! le programme étendu `simple-trial` (démontre la liaison d'une lib en plus).

#![forbid(unsafe_code)]

use std::io::{self, Write};

/// Ligne fixe émise par cette bibliothèque.
pub const CLIB_LINE: &str = "Hello from clib.";

/// Écrit la ligne de clib (terminée par `\n`) sur `out`.
pub fn write_line<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{CLIB_LINE}")
}

/// Imprime la ligne de clib sur stdout.
pub fn clib_hello() {
    println!("{CLIB_LINE}");
}
