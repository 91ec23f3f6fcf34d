// src/noyau/moteur.rs
//
// Moteur d'expressions — service d'évaluation consommé par le noyau
// ------------------------------------------------------------------
// Contrat étroit : une chaîne infixe (+ - * / ^, parenthèses, virgule
// d'arguments, identifiants insensibles à la casse) évaluée en f64 dans un
// Contexte qui porte:
// - des paramètres nommés (PI, E, ...)
// - une table de rappels par nom de fonction, consultée AVANT les
//   intrinsèques (sin, cos, tan, sqrt, log, log10, abs, exp, pow)
//
// Organisation interne:
// - jetons.rs : tokenisation (nombres à exposant, identifiants, opérateurs)
// - rpn.rs    : shunting-yard + évaluation par pile

pub mod jetons;
pub mod rpn;

use std::collections::HashMap;

use thiserror::Error;

use jetons::tokenize;
use rpn::{eval_rpn, to_rpn};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurMoteur {
    #[error("syntaxe invalide: {0}")]
    Syntaxe(String),

    #[error("fonction inconnue: {0}")]
    FonctionInconnue(String),

    #[error("paramètre inconnu: {0}")]
    ParametreInconnu(String),

    #[error("mauvais nombre d'arguments pour {0}")]
    Arite(String),

    #[error("division par zéro")]
    DivisionParZero,
}

/// Rappel de fonction : transformation numérique pure.
pub type Rappel = Box<dyn Fn(&[f64]) -> Result<f64, ErreurMoteur>>;

/// Contexte d'évaluation : paramètres + surcharges de fonctions.
/// Les noms sont normalisés en minuscules (le moteur est insensible à la casse).
#[derive(Default)]
pub struct Contexte {
    parametres: HashMap<String, f64>,
    surcharges: HashMap<String, Rappel>,
}

/// Fonctions intrinsèques (consultées après les surcharges).
const INTRINSEQUES: &[&str] = &[
    "sin", "cos", "tan", "sqrt", "log", "log10", "abs", "exp", "pow",
];

impl Contexte {
    /// Contexte standard : constantes PI et E liées, aucune surcharge.
    pub fn standard() -> Self {
        let mut ctx = Self::default();
        ctx.definir_parametre("PI", std::f64::consts::PI);
        ctx.definir_parametre("E", std::f64::consts::E);
        ctx
    }

    pub fn definir_parametre(&mut self, nom: &str, valeur: f64) {
        self.parametres.insert(nom.to_lowercase(), valeur);
    }

    /// Installe un rappel consulté avant l'intrinsèque du même nom.
    pub fn surcharger_fonction(
        &mut self,
        nom: &str,
        rappel: impl Fn(&[f64]) -> Result<f64, ErreurMoteur> + 'static,
    ) {
        self.surcharges.insert(nom.to_lowercase(), Box::new(rappel));
    }

    /// L'identifiant (minuscules) désigne-t-il une fonction connue ?
    pub fn connait_fonction(&self, nom: &str) -> bool {
        self.surcharges.contains_key(nom) || INTRINSEQUES.contains(&nom)
    }

    pub fn parametre(&self, nom: &str) -> Option<f64> {
        self.parametres.get(nom).copied()
    }

    /// Appelle une fonction : surcharge d'abord, intrinsèque sinon.
    pub fn appeler(&self, nom: &str, args: &[f64]) -> Result<f64, ErreurMoteur> {
        if let Some(rappel) = self.surcharges.get(nom) {
            return rappel(args);
        }

        let unaire = |args: &[f64]| -> Result<f64, ErreurMoteur> {
            match args {
                [x] => Ok(*x),
                _ => Err(ErreurMoteur::Arite(nom.to_string())),
            }
        };

        match nom {
            "sin" => Ok(unaire(args)?.sin()),
            "cos" => Ok(unaire(args)?.cos()),
            "tan" => Ok(unaire(args)?.tan()),
            "sqrt" => Ok(unaire(args)?.sqrt()),
            "log" => Ok(unaire(args)?.ln()),
            "log10" => Ok(unaire(args)?.log10()),
            "abs" => Ok(unaire(args)?.abs()),
            "exp" => Ok(unaire(args)?.exp()),
            "pow" => match args {
                [base, exposant] => Ok(base.powf(*exposant)),
                _ => Err(ErreurMoteur::Arite(nom.to_string())),
            },
            _ => Err(ErreurMoteur::FonctionInconnue(nom.to_string())),
        }
    }
}

/// API publique : évalue une chaîne infixe dans un contexte.
pub fn evaluer(expression: &str, ctx: &Contexte) -> Result<f64, ErreurMoteur> {
    let jetons = tokenize(expression)?;
    if jetons.is_empty() {
        return Err(ErreurMoteur::Syntaxe("expression vide".into()));
    }
    let rpn = to_rpn(&jetons, ctx)?;
    eval_rpn(&rpn, ctx)
}
