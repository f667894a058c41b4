//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état du solveur (mode, entrée, résultat, erreur, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

/// Ce que l'entrée représente.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Expression,
    Equation,
}

impl Mode {
    pub fn libelle(self) -> &'static str {
        match self {
            Mode::Expression => "Expression",
            Mode::Equation => "Équation",
        }
    }
}

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    /// forme postfixée (mode expression seulement)
    pub rpn: String,
    /// une ligne par opérateur appliqué
    pub etapes: Vec<String>,
    /// réponse telle que le transport l'enverrait
    pub json: String,
}

#[derive(Clone, Debug)]
pub struct AppSolveur {
    // --- entrée utilisateur ---
    pub mode: Mode,
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // `result` (expression) ou `x` (équation)
    pub erreur: String,   // message d'erreur de la réponse {ok:false}

    // --- démarche (panneau d'explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppSolveur {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppSolveur {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats). Le mode est conservé.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l'entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l'entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Changement de mode : les résultats de l'autre mode n'ont plus de sens.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.clear_resultats();
        }
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Le résultat précédent est effacé, la démarche ne garde que la réponse JSON.
    pub fn set_erreur(&mut self, msg: impl Into<String>, json: String) {
        self.erreur = msg.into();
        self.resultat.clear();
        self.demarche = Demarche {
            json,
            ..Demarche::default()
        };
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet.
    pub fn set_resultats(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }
}
