// src/noyau/format.rs
//
// Affichage des nombres dans le texte des étapes (jamais dans `result` / `x`,
// qui restent des f64 pleine précision).

/// Écart maximal à l'entier le plus proche pour un affichage “entier”.
pub const EPSILON_ENTIER: f64 = 1e-9;

/// Entier si |x - round(x)| < 1e-9 (sans partie décimale), sinon décimal le plus court
/// qui se relit à l'identique.
pub fn fmt_nombre(x: f64) -> String {
    let r = x.round();
    if (x - r).abs() < EPSILON_ENTIER {
        // -0 s'affiche 0
        if r == 0.0 {
            return "0".to_string();
        }
        return format!("{r:.0}");
    }
    // inf / NaN tombent ici (x - round(x) n'est pas < ε)
    format!("{x}")
}
