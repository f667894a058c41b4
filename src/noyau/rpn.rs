// src/noyau/rpn.rs
//
// Shunting-yard : chaîne normalisée -> RPN (postfix)
//
// Règles:
// - Une seule passe gauche -> droite : pile d'opérateurs (LIFO) + sortie (FIFO, ajout seulement).
// - Moins unaire (Op::Neg) : '-' en position 0, juste après un autre opérateur, ou juste après '('.
//   Sinon c'est la soustraction.
// - Dépilement : on sort le sommet si
//     (entrant assoc. gauche et prec <= prec sommet) ou (entrant assoc. droite et prec < prec sommet).
//   Donc '^' et le moins unaire s'enchaînent de droite à gauche, + - * / de gauche à droite.
//
// NOTE:
// - Le moins unaire a la plus forte précédence : "-2^2" donne (-2)^2 = 4.

use super::erreur::ErreurCalcul;
use super::jetons::{est_car_operateur, lire_nombre, Op, Tok};

/// Entrée de la pile d'opérateurs : '(' en attente de sa fermante, ou opérateur.
#[derive(Clone, Copy, Debug)]
enum Empile {
    LPar,
    Op(Op),
}

/// Convertit une chaîne normalisée (sans espaces) en RPN.
///
/// Exemple:
///   "3+4*2"  -> [3, 4, 2, *, +]
///   "-5+3"   -> [5, neg, 3, +]
pub fn to_rpn(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let chars: Vec<char> = s.chars().collect();
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Empile> = Vec::new();

    let mut i: usize = 0;
    while i < chars.len() {
        let c = chars[i];

        // Nombre (décimales acceptées)
        if c.is_ascii_digit() || c == '.' {
            let (v, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(v));
            i = fin;
            continue;
        }

        // Parenthèses
        if c == '(' {
            ops.push(Empile::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            loop {
                match ops.pop() {
                    Some(Empile::LPar) => break,
                    Some(Empile::Op(top)) => out.push(Tok::Op(top)),
                    None => return Err(ErreurCalcul::MismatchedParen(')')),
                }
            }
            i += 1;
            continue;
        }

        // Opérateurs
        if let Some(binaire) = Op::depuis_car(c) {
            let op = if binaire == Op::Sub && est_position_unaire(&chars, i) {
                Op::Neg
            } else {
                binaire
            };

            while let Some(Empile::Op(top)) = ops.last().copied() {
                let doit_pop = if op.est_assoc_gauche() {
                    op.precedence() <= top.precedence()
                } else {
                    op.precedence() < top.precedence()
                };

                if !doit_pop {
                    break;
                }
                ops.pop();
                out.push(Tok::Op(top));
            }

            ops.push(Empile::Op(op));
            i += 1;
            continue;
        }

        return Err(ErreurCalcul::InvalidCharacter(c));
    }

    // vide la pile ops
    while let Some(entree) = ops.pop() {
        match entree {
            Empile::LPar => return Err(ErreurCalcul::MismatchedParen('(')),
            Empile::Op(op) => out.push(Tok::Op(op)),
        }
    }

    Ok(out)
}

/// '-' unaire : début d'entrée, après un opérateur, ou après '('.
fn est_position_unaire(chars: &[char], i: usize) -> bool {
    if i == 0 {
        return true;
    }
    let prev = chars[i - 1];
    est_car_operateur(prev) || prev == '('
}
