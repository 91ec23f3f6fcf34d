//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la séance de calcul (noyau) et relayer les commandes des
//! boutons, sans logique d'affichage.
//!
//! Contrats (Loi de Clément, version UI) :
//! - Aucune règle de saisie ici (pas de jetons, pas de parsing) : la séance
//!   décide de tout.
//! - Les erreurs ne remontent pas à la vue : la séance les porte, la vue
//!   les lit via resultat()/affichage().

use crate::noyau::{Commande, Session};

#[derive(Default)]
pub struct AppCalc {
    session: Session,
}

impl AppCalc {
    /* ------------------------ Relais vers la séance ------------------------ */

    /// Applique une commande de bouton/clavier.
    /// Le Result est absorbé : l'erreur est déjà visible via la séance.
    pub fn appuyer(&mut self, commande: Commande) {
        let _ = self.session.appliquer(commande);
    }

    /* ------------------------ Lecture pour la vue ------------------------ */

    pub fn expression(&self) -> &str {
        self.session.affichage()
    }

    pub fn resultat(&self) -> String {
        self.session.resultat()
    }

    pub fn mode(&self) -> &'static str {
        self.session.mode()
    }
}
