//! smoke — programme A du smoke test de build.
//!
//! Séquence linéaire, un seul passage : les deux lignes des bibliothèques
//! collaboratrices, puis la valeur de configuration figée au build. Aucun
//! argument, aucun chemin d'échec au runtime (le contrat de config se joue
//! à la compilation, dans `buildconf`).

use std::io::{self, Write};

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    log::debug!("smoke: séquence à 3 lignes");

    alib::print_from_alib();
    blib::print_from_blib();

    let mut out = io::stdout().lock();
    writeln!(out, "{}", buildconf::report_line())?;

    Ok(())
}
