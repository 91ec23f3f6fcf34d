//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - jetons.rs     : jeton de saisie (affichage + eval + genre)
//! - historique.rs : journal des jetons + règles d'ajout + reconstruction
//! - operande.rs   : extraction du dernier opérande (puissances)
//! - session.rs    : surface d'entrée (commandes) + état de séance
//! - evalue.rs     : pipeline "=" (auto-fermeture, %, trig, formatage)
//! - pourcent.rs   : réécriture des % en /100.0
//! - format.rs     : formatage du résultat numérique
//! - moteur.rs     : moteur d'expressions (service consommé)
//! - erreurs.rs    : taxonomie d'erreurs

pub mod erreurs;
pub mod evalue;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod moteur;
pub mod operande;
pub mod pourcent;
pub mod session;

#[cfg(test)]
mod tests_parcours;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurCalc;
pub use session::{Commande, Constante, Fonction, OpBinaire, Session};
