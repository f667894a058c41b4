// src/noyau/normalise.rs

use super::erreur::ErreurCalcul;

/// Retire TOUS les blancs (espaces, tabulations, retours, blancs Unicode).
/// Utile aussi pour les requêtes GET où '+' devient un espace côté transport.
pub fn sans_blancs(brut: &str) -> String {
    brut.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Normalisation d'une expression : sans blancs, et non vide.
pub fn normaliser(brut: &str) -> Result<String, ErreurCalcul> {
    let s = sans_blancs(brut);
    if s.is_empty() {
        return Err(ErreurCalcul::EmptyInput);
    }
    Ok(s)
}
