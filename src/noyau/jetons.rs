// src/noyau/jetons.rs

use std::fmt;

use super::erreur::ErreurCalcul;
use super::format::fmt_nombre;

/// Opérateurs de la grammaire (fermée) : + - * / ^ et le moins unaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Neg, // moins unaire
}

impl Op {
    /// Opérateur binaire associé à un caractère (le moins unaire est décidé par le contexte).
    pub fn depuis_car(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            '^' => Some(Op::Pow),
            _ => None,
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Op::Neg => 4,
            Op::Pow => 3,
            Op::Mul | Op::Div => 2,
            Op::Add | Op::Sub => 1,
        }
    }

    /// '^' et le moins unaire s'enchaînent de droite à gauche.
    pub fn est_assoc_gauche(self) -> bool {
        !matches!(self, Op::Pow | Op::Neg)
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Pow => "^",
            Op::Neg => "neg",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

/// Jeton de la forme postfixée : les parenthèses ne sortent jamais de la pile d'opérateurs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Op),
}

pub fn est_car_operateur(c: char) -> bool {
    Op::depuis_car(c).is_some()
}

/// Lit un nombre à partir de `debut` : suite maximale de chiffres avec AU PLUS un point.
/// Un second '.' arrête la lecture (il sera relu comme début du nombre suivant).
///
/// Retourne la valeur et l'indice du premier caractère non consommé.
pub fn lire_nombre(chars: &[char], debut: usize) -> Result<(f64, usize), ErreurCalcul> {
    let mut i = debut;
    let mut point_vu = false;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            i += 1;
        } else if c == '.' && !point_vu {
            point_vu = true;
            i += 1;
        } else {
            break;
        }
    }

    let texte: String = chars[debut..i].iter().collect();
    let v = texte
        .parse::<f64>()
        .map_err(|_| ErreurCalcul::NumberParseError(texte.clone()))?;
    Ok((v, i))
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => fmt_nombre(*v),
            Tok::Op(op) => op.symbole().to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
