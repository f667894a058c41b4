// src/noyau/equation.rs
//
// Équation linéaire à une inconnue : a·x + b = rhs  =>  x = (rhs - b) / a
//
// Forme acceptée (volontairement simple) :
// - membre de gauche : somme de termes signés, "2x", "-x", "X", "3.5", ...
// - membre de droite : UN nombre littéral
// - pas de parenthèses, pas de x*x, pas d'autre variable
//
// NOTE:
// - Seul le PREMIER '=' coupe l'équation. Un second '=' reste dans le membre de droite,
//   qui n'est alors plus un nombre (RightSideNotNumber).
// - Un terme avec plusieurs x ("2xx") n'est pas refusé : toutes les lettres x sont retirées.

use super::erreur::ErreurCalcul;
use super::normalise::sans_blancs;

/// En dessous, le coefficient de x est considéré nul.
pub const EPSILON_COEFF: f64 = 1e-12;

/// Sommes courantes du membre de gauche.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Accumulateur {
    /// somme des coefficients de x
    pub a: f64,
    /// somme des termes constants
    pub b: f64,
}

impl Accumulateur {
    /// Ajoute un terme signé non vide : contribue à `a` OU à `b`, jamais aux deux.
    pub fn ajouter_terme(&mut self, terme: &str) -> Result<(), ErreurCalcul> {
        if terme.contains(|c: char| matches!(c, 'x' | 'X')) {
            let reste: String = terme.chars().filter(|c| !matches!(c, 'x' | 'X')).collect();
            let coeff = match reste.as_str() {
                "" | "+" => 1.0,
                "-" => -1.0,
                autre => lire_litteral(autre).ok_or_else(|| ErreurCalcul::InvalidTermParse {
                    terme: terme.to_string(),
                    variable: true,
                })?,
            };
            self.a += coeff;
        } else {
            let v = lire_litteral(terme).ok_or_else(|| ErreurCalcul::InvalidTermParse {
                terme: terme.to_string(),
                variable: false,
            })?;
            self.b += v;
        }
        Ok(())
    }
}

/// Littéral décimal strict : `[+-]? chiffres [. chiffres] [(e|E) [+-]? chiffres]`,
/// au moins un chiffre avant l'exposant, valeur finie.
///
/// `str::parse::<f64>` accepte aussi "inf", "NaN", "infinity" : refusés ici.
pub fn lire_litteral(s: &str) -> Option<f64> {
    let octets = s.as_bytes();
    let mut i = 0;

    if matches!(octets.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let mut chiffres = 0usize;
    let mut point_vu = false;
    while let Some(&c) = octets.get(i) {
        match c {
            b'0'..=b'9' => chiffres += 1,
            b'.' if !point_vu => point_vu = true,
            _ => break,
        }
        i += 1;
    }
    if chiffres == 0 {
        return None;
    }

    if matches!(octets.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(octets.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let debut_exposant = i;
        while octets.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        if i == debut_exposant {
            return None;
        }
    }

    if i != octets.len() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Découpe le membre de gauche en termes signés ("-" devient "+-", puis coupe sur '+')
/// et les accumule.
pub fn analyser_membre_gauche(gauche: &str) -> Result<Accumulateur, ErreurCalcul> {
    let signe = gauche.replace('-', "+-");
    let mut acc = Accumulateur::default();
    for terme in signe.split('+').filter(|t| !t.is_empty()) {
        acc.ajouter_terme(terme)?;
    }
    Ok(acc)
}

/// Résout l'équation. Les blancs sont ignorés.
pub fn resoudre_lineaire(brut: &str) -> Result<f64, ErreurCalcul> {
    let s = sans_blancs(brut);

    let (gauche, droite) = s.split_once('=').ok_or(ErreurCalcul::MissingEquals)?;

    let rhs = lire_litteral(droite)
        .ok_or_else(|| ErreurCalcul::RightSideNotNumber(droite.to_string()))?;

    let Accumulateur { a, b } = analyser_membre_gauche(gauche)?;
    log::debug!("équation {s:?} : a = {a}, b = {b}, rhs = {rhs}");

    if a.abs() < EPSILON_COEFF {
        return Err(ErreurCalcul::NoSolutionOrInfinite);
    }

    Ok((rhs - b) / a)
}
