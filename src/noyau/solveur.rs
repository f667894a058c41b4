//! Noyau — entrées publiques (pipeline réel)
//!
//! solve_expression : normalise -> RPN -> évaluation (+ étapes)
//! solve_equation   : sans blancs -> '=' -> membre de droite -> termes de gauche -> x
//!
//! Contrat : aucune erreur ne sort d'ici. Toute ErreurCalcul devient une réponse
//! `{ ok: false, error }` ; les noms de champs sont ceux du transport JSON.

use serde::{Serialize, Serializer};

use super::equation::resoudre_lineaire;
use super::erreur::ErreurCalcul;
use super::eval::eval_rpn;
use super::normalise::normaliser;
use super::rpn::to_rpn;

/// Réponse de `solve_expression`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReponseExpression {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "nombre_json")]
    pub result: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Réponse de `solve_equation`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReponseEquation {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "nombre_json")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// JSON n'a pas de littéral pour inf/NaN (serde_json les écrirait `null`) :
/// ils partent en chaînes "Infinity", "-Infinity", "NaN".
fn nombre_json<S: Serializer>(v: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match *v {
        Some(x) if x.is_nan() => s.serialize_str("NaN"),
        Some(x) if x.is_infinite() => {
            s.serialize_str(if x > 0.0 { "Infinity" } else { "-Infinity" })
        }
        Some(x) => s.serialize_f64(x),
        None => s.serialize_none(),
    }
}

/// Évalue une expression arithmétique (+ - * / ^, parenthèses, décimaux, moins unaire).
///
/// `expression` est renvoyée telle que reçue (blancs compris).
pub fn solve_expression(expression: &str) -> ReponseExpression {
    match evaluer(expression) {
        Ok((result, steps)) => ReponseExpression {
            ok: true,
            expression: Some(expression.to_string()),
            steps: Some(steps),
            result: Some(result),
            error: None,
        },
        Err(e) => {
            log::warn!("expression {expression:?} refusée : {e}");
            ReponseExpression {
                error: Some(e.to_string()),
                ..Default::default()
            }
        }
    }
}

/// Résout une équation linéaire en x (ex: "2x+3x-4=21", "-x+10=4").
pub fn solve_equation(equation: &str) -> ReponseEquation {
    match resoudre_lineaire(equation) {
        Ok(x) => {
            log::debug!("équation {equation:?} : x = {x}");
            ReponseEquation {
                ok: true,
                equation: Some(equation.to_string()),
                x: Some(x),
                error: None,
            }
        }
        Err(e) => {
            log::warn!("équation {equation:?} refusée : {e}");
            ReponseEquation {
                error: Some(e.to_string()),
                ..Default::default()
            }
        }
    }
}

fn evaluer(expression: &str) -> Result<(f64, Vec<String>), ErreurCalcul> {
    let s = normaliser(expression)?;
    let rpn = to_rpn(&s)?;
    log::debug!("expression {s:?} : {} jeton(s) en RPN", rpn.len());
    let (result, steps) = eval_rpn(&rpn)?;
    log::debug!("expression {s:?} = {result} en {} étape(s)", steps.len());
    Ok((result, steps))
}
