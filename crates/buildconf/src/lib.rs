//! buildconf — valeur de configuration injectée à la compilation.
//!
//! Le symbole `CONFIG_PARAM_1` est exigé au moment du build (voir `build.rs`,
//! qui échoue avec un diagnostic si la configuration ne le fournit pas). Ce
//! crate le fige dans une constante et fabrique la ligne de rapport commune
//! aux deux programmes. Aucun chemin d'erreur au runtime : une fois compilé,
//! la valeur est là.

#![forbid(unsafe_code)]

/// Valeur de `CONFIG_PARAM_1` figée au build. Le `env!` double la garde du
/// script de build : symbole absent => erreur de compilation, pas d'exécutable.
pub const CONFIG_PARAM_1: &str = env!("CONFIG_PARAM_1");

/// Ligne de rapport imprimée en dernier par chaque programme,
/// de la forme `CONFIG_PARAM_1 is 'release-1.0'`.
#[must_use]
pub fn report_line() -> String {
    format!("CONFIG_PARAM_1 is '{CONFIG_PARAM_1}'")
}
