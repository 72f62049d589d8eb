//! simple-trial — programme B, variante étendue du smoke test.
//!
//! Même séquence que `smoke`, avec un troisième appel de bibliothèque
//! (`clib_hello`) avant le rapport de configuration : la sortie se termine
//! toujours par la ligne de config, en 4 lignes au lieu de 3.

use std::io::{self, Write};

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    log::debug!("simple-trial: séquence à 4 lignes");

    alib::print_from_alib();
    blib::print_from_blib();
    clib::clib_hello();

    let mut out = io::stdout().lock();
    writeln!(out, "{}", buildconf::report_line())?;

    Ok(())
}
