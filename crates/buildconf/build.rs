// build.rs — vérifie le contrat de configuration AU BUILD, jamais au runtime.
//
// CONFIG_PARAM_1 doit exister dans l'environnement du build (fourni par
// `.cargo/config.toml` [env] ou exporté à la main). Absent : on tue le build
// avec un diagnostic qui nomme le symbole. Présent : on le repasse à rustc
// pour que `env!("CONFIG_PARAM_1")` le fige dans le binaire.

use std::env;
use std::process;

fn main() {
    // Re-déclenche ce script si la configuration change.
    println!("cargo:rerun-if-env-changed=CONFIG_PARAM_1");

    match env::var("CONFIG_PARAM_1") {
        Ok(value) => {
            println!("cargo:rustc-env=CONFIG_PARAM_1={value}");
        }
        Err(_) => {
            eprintln!("error: CONFIG_PARAM_1 is not defined");
            eprintln!(
                "Fournis CONFIG_PARAM_1 au build : entrée [env] de .cargo/config.toml, \
                 ou `CONFIG_PARAM_1=... cargo build`."
            );
            process::exit(1);
        }
    }
}
