//! Noyau — évaluation de la RPN avec trace des étapes.
//!
//! Une pile de valeurs (f64) ; chaque application d'opérateur ajoute UNE étape lisible,
//! dans l'ordre d'évaluation : lues de haut en bas, les étapes refont le calcul.
//!
//! Pas de garde sur la division par zéro ni sur le domaine de '^' :
//! 1/0 = inf, 0/0 = NaN, (-8)^(1/3) = NaN (sémantique IEEE-754 ordinaire).

use super::erreur::ErreurCalcul;
use super::format::fmt_nombre;
use super::jetons::{Op, Tok};

/// Évalue une suite postfixée. Retourne (résultat, étapes).
pub fn eval_rpn(rpn: &[Tok]) -> Result<(f64, Vec<String>), ErreurCalcul> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());
    let mut etapes: Vec<String> = Vec::new();

    for tok in rpn {
        match *tok {
            Tok::Num(v) => pile.push(v),

            Tok::Op(Op::Neg) => {
                let a = pile.pop().ok_or(ErreurCalcul::MissingOperand(Op::Neg))?;
                let r = -a;
                etapes.push(format!("negate({}) = {}", fmt_nombre(a), fmt_nombre(r)));
                pile.push(r);
            }

            Tok::Op(op @ Op::Add) => applique_binaire(&mut pile, &mut etapes, op, |a, b| a + b)?,
            Tok::Op(op @ Op::Sub) => applique_binaire(&mut pile, &mut etapes, op, |a, b| a - b)?,
            Tok::Op(op @ Op::Mul) => applique_binaire(&mut pile, &mut etapes, op, |a, b| a * b)?,
            Tok::Op(op @ Op::Div) => applique_binaire(&mut pile, &mut etapes, op, |a, b| a / b)?,
            Tok::Op(op @ Op::Pow) => applique_binaire(&mut pile, &mut etapes, op, f64::powf)?,
        }
    }

    match pile.as_slice() {
        [v] => Ok((*v, etapes)),
        _ => Err(ErreurCalcul::InvalidExpression(pile.len())),
    }
}

/// Dépile b puis a (l'opérande de droite est au sommet), empile `calcul(a, b)`.
fn applique_binaire(
    pile: &mut Vec<f64>,
    etapes: &mut Vec<String>,
    op: Op,
    calcul: impl Fn(f64, f64) -> f64,
) -> Result<(), ErreurCalcul> {
    let &[.., a, b] = pile.as_slice() else {
        return Err(ErreurCalcul::MissingOperand(op));
    };
    pile.truncate(pile.len() - 2);

    let r = calcul(a, b);
    etapes.push(format!(
        "{} {} {} = {}",
        fmt_nombre(a),
        op.symbole(),
        fmt_nombre(b),
        fmt_nombre(r)
    ));
    pile.push(r);
    Ok(())
}
