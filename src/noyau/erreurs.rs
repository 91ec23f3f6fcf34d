// src/noyau/erreurs.rs
//
// Taxonomie d'erreurs du noyau.
//
// Deux familles:
// - BaseManquante : locale et récupérable (l'historique reste intact,
//   l'utilisateur corrige sa saisie).
// - Les trois autres : terminales pour l'expression courante
//   (historique vidé, l'affichage montre le marqueur d'erreur).
//
// L'expression vide n'est PAS une erreur : "=" sur un historique vide
// est un non-événement (résultat neutre).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// Puissance (x² ou xʸ) sans opérande devant.
    #[error("base requise pour la puissance")]
    BaseManquante,

    /// Tangente à une asymptote, ou division par zéro dans le moteur.
    #[error("division par zéro")]
    DivisionParZero,

    /// Le moteur d'expressions rejette la chaîne.
    #[error("expression invalide")]
    ExpressionInvalide,

    /// Résultat NaN ou infini.
    #[error("dépassement numérique")]
    DepassementNumerique,
}

impl ErreurCalc {
    /// Une erreur terminale vide l'historique; BaseManquante le préserve.
    pub fn est_terminale(&self) -> bool {
        !matches!(self, ErreurCalc::BaseManquante)
    }
}
