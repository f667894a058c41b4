// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Chaque étape (normalisation, RPN, évaluation, équation) renvoie Result<_, ErreurCalcul>;
// seules les deux entrées publiques (solveur.rs) les transforment en réponse {ok:false}.

use thiserror::Error;

use super::jetons::Op;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("Entrée vide")]
    EmptyInput,

    #[error("Caractère invalide : '{0}'")]
    InvalidCharacter(char),

    /// Porte la parenthèse fautive : ')' sans ouvrante, ou '(' jamais fermée.
    #[error("Parenthèse '{0}' non appariée")]
    MismatchedParen(char),

    #[error("Opérande manquant pour '{0}'")]
    MissingOperand(Op),

    /// Taille de la pile de valeurs en fin d'évaluation (≠ 1).
    #[error("Expression invalide ({0} valeur(s) restante(s))")]
    InvalidExpression(usize),

    #[error("Nombre invalide : \"{0}\"")]
    NumberParseError(String),

    #[error("Aucun '=' trouvé")]
    MissingEquals,

    #[error("Le membre de droite doit être un nombre : \"{0}\"")]
    RightSideNotNumber(String),

    #[error("Terme {} invalide : \"{terme}\"", genre_terme(.variable))]
    InvalidTermParse { terme: String, variable: bool },

    /// Coefficient de x nul : aucun terme en x, ou termes qui s'annulent.
    #[error("Aucun terme en x, ou infinité / absence de solutions")]
    NoSolutionOrInfinite,
}

fn genre_terme(variable: &bool) -> &'static str {
    if *variable {
        "en x"
    } else {
        "constant"
    }
}
