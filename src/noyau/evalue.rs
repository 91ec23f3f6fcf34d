// src/noyau/evalue.rs
//
// Évaluation de l'expression terminée (le bouton "=").
//
// Pipeline:
//   chaîne évaluable -> auto-fermeture des groupes ouverts -> réécriture %
//     -> moteur (PI/E liés + trig surchargée selon le mode d'angle)
//     -> formatage du résultat
//
// Cas préalables:
// - historique vide             => résultat neutre (ni valeur ni erreur)
// - historique "que des chiffres" => la chaîne d'affichage EST le résultat,
//   aucun calcul, l'état reste en place
//
// La conversion degrés -> radians et la garde de la tangente vivent ici,
// installées comme surcharges du moteur : le moteur lui-même ignore le mode.

use tracing::debug;

use super::erreurs::ErreurCalc;
use super::format::formater_resultat;
use super::historique::Historique;
use super::moteur::{evaluer as evaluer_moteur, Contexte, ErreurMoteur};
use super::pourcent::reecrire_pourcents;

/// Tangente : |cos| sous ce seuil => asymptote, division par zéro.
const EPSILON_TANGENTE: f64 = 1e-12;

/// Issue d'une évaluation réussie.
#[derive(Clone, Debug, PartialEq)]
pub enum Issue {
    /// Rien à évaluer (historique vide) : pas de valeur, pas d'erreur.
    Neutre,
    /// Littéral sans opération : le texte d'affichage, tel quel.
    Litteral(String),
    /// Valeur calculée et formatée.
    Valeur(String),
}

/// Évalue l'historique dans le mode d'angle donné.
/// Ne mute rien : la remise à zéro / le ré-amorçage appartiennent à la session.
pub fn evaluer(historique: &Historique, mode_radians: bool) -> Result<Issue, ErreurCalc> {
    if historique.est_vide() && historique.evaluation().is_empty() {
        return Ok(Issue::Neutre);
    }

    if historique.que_des_nombres() {
        // "123" ou "0.5" : rien à calculer
        return Ok(Issue::Litteral(historique.affichage().to_string()));
    }

    let mut chaine = historique.evaluation().to_string();
    if chaine.is_empty() {
        return Err(ErreurCalc::ExpressionInvalide);
    }

    // Auto-fermeture : un ')' par groupe encore ouvert.
    for _ in 0..historique.profondeur() {
        chaine.push(')');
    }

    let chaine = reecrire_pourcents(&chaine);
    debug!(expression = %chaine, mode_radians, "évaluation");

    let ctx = contexte_de_session(mode_radians);
    let valeur = evaluer_moteur(&chaine, &ctx).map_err(|e| match e {
        ErreurMoteur::DivisionParZero => ErreurCalc::DivisionParZero,
        _ => ErreurCalc::ExpressionInvalide,
    })?;

    Ok(Issue::Valeur(formater_resultat(valeur)?))
}

/// Contexte du moteur pour une évaluation : PI/E liés, trig surchargée.
fn contexte_de_session(mode_radians: bool) -> Contexte {
    let mut ctx = Contexte::standard();

    let angle = move |x: f64| -> f64 {
        if mode_radians {
            x
        } else {
            x * (std::f64::consts::PI / 180.0)
        }
    };

    ctx.surcharger_fonction("sin", move |args| match args {
        [x] => Ok(angle(*x).sin()),
        _ => Err(ErreurMoteur::Arite("sin".into())),
    });

    ctx.surcharger_fonction("cos", move |args| match args {
        [x] => Ok(angle(*x).cos()),
        _ => Err(ErreurMoteur::Arite("cos".into())),
    });

    ctx.surcharger_fonction("tan", move |args| match args {
        [x] => {
            let v = angle(*x);
            if v.cos().abs() < EPSILON_TANGENTE {
                return Err(ErreurMoteur::DivisionParZero);
            }
            Ok(v.tan())
        }
        _ => Err(ErreurMoteur::Arite("tan".into())),
    });

    ctx
}
