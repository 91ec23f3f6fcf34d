// src/noyau/jetons.rs
//
// Jeton de saisie : l'unité atomique de l'expression en construction.
//
// Chaque jeton porte DEUX formes synchronisées:
// - affichage : fragment lisible (glyphes ×, ÷, π, √, marqueurs ^{ })
// - eval      : fragment ASCII de la chaîne évaluable (*, /, PI, Sqrt(, ...)
//
// Le genre est un variant fermé : le match exhaustif remplace les
// comparaisons de chaînes pour le classement valeur/opérateur.

/// Genre sémantique d'un jeton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    Nombre,
    Operateur,
    Fonction,
    Constante,
    Ouvrante,
    Fermante,
    /// Opérateur postfixe qui produit une valeur (ex: %).
    PostfixeValeur,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Jeton {
    pub affichage: String,
    pub eval: String,
    pub genre: Genre,
}

impl Jeton {
    pub fn nouveau(affichage: impl Into<String>, eval: impl Into<String>, genre: Genre) -> Self {
        Self {
            affichage: affichage.into(),
            eval: eval.into(),
            genre,
        }
    }

    pub fn nombre(texte: impl Into<String>) -> Self {
        let t = texte.into();
        Self::nouveau(t.clone(), t, Genre::Nombre)
    }

    pub fn operateur(affichage: impl Into<String>, eval: impl Into<String>) -> Self {
        Self::nouveau(affichage, eval, Genre::Operateur)
    }

    pub fn fonction(affichage: impl Into<String>, eval: impl Into<String>) -> Self {
        Self::nouveau(affichage, eval, Genre::Fonction)
    }

    pub fn constante(affichage: impl Into<String>, eval: impl Into<String>) -> Self {
        Self::nouveau(affichage, eval, Genre::Constante)
    }

    pub fn ouvrante() -> Self {
        Self::nouveau("(", "(", Genre::Ouvrante)
    }

    pub fn fermante(affichage: impl Into<String>, eval: impl Into<String>) -> Self {
        Self::nouveau(affichage, eval, Genre::Fermante)
    }

    /// Multiplication implicite : insérée entre deux valeurs adjacentes.
    pub fn fois_implicite() -> Self {
        Self::operateur("×", "*")
    }

    /// Le jeton termine une valeur (un nombre, π, 50%, une parenthèse fermée).
    pub fn produit_valeur(&self) -> bool {
        matches!(
            self.genre,
            Genre::Nombre | Genre::Constante | Genre::PostfixeValeur | Genre::Fermante
        )
    }

    /// Le jeton commence une valeur (chiffre, constante, groupe, appel).
    pub fn demarre_valeur(&self) -> bool {
        matches!(
            self.genre,
            Genre::Nombre | Genre::Constante | Genre::Ouvrante | Genre::Fonction
        )
    }

    /// Point décimal isolé (le jeton "." du pavé).
    pub fn est_point(&self) -> bool {
        self.genre == Genre::Nombre && self.eval == "."
    }
}

/// Le jeton entrant prolonge-t-il le nombre en cours ?
/// (chiffre après chiffre, ou "." après un nombre — jamais de × implicite là)
pub fn prolonge_nombre(dernier: &Jeton, entrant: &Jeton) -> bool {
    let chiffre_apres_chiffre =
        entrant.genre == Genre::Nombre && dernier.genre == Genre::Nombre && !entrant.est_point();
    let point_apres_nombre = entrant.est_point() && dernier.genre == Genre::Nombre;
    chiffre_apres_chiffre || point_apres_nombre
}
