//! Noyau du solveur (pur, sans état partagé)
//!
//! Organisation interne :
//! - erreur.rs    : taxonomie ErreurCalcul
//! - normalise.rs : retrait des blancs + entrée vide
//! - jetons.rs    : Tok / Op (précédence, associativité) + lecture des nombres
//! - rpn.rs       : shunting-yard (une passe) -> RPN
//! - eval.rs      : évaluation RPN + étapes lisibles
//! - format.rs    : affichage des nombres dans les étapes
//! - equation.rs  : équation linéaire en x
//! - solveur.rs   : entrées publiques, réponses {ok, ...}

pub mod equation;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod rpn;
pub mod solveur;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use solveur::{solve_equation, solve_expression};
