// src/noyau/session.rs
//
// Séance de calcul : la surface d'entrée du noyau.
//
// Tout l'état partagé vit ici (historique, mode d'angle, résultat, erreur),
// possédé par un seul objet, muté séquentiellement — aucune synchronisation.
//
// Contrats (Loi de Clément, version noyau):
// - Chaque opération aboutit entièrement ou ne mute rien (garde décimale,
//   base manquante).
// - Toute saisie efface le résultat affiché et l'erreur en cours.
// - Le mode d'angle survit aux remises à zéro de l'expression.
// - BaseManquante laisse l'historique intact; les erreurs d'évaluation
//   vident tout.

use tracing::{debug, warn};

use super::erreurs::ErreurCalc;
use super::evalue::{evaluer, Issue};
use super::historique::Historique;
use super::jetons::{Genre, Jeton};
use super::operande::extraire_dernier_operande;

/// Marqueur affiché à la place de l'expression après une erreur terminale.
const MARQUEUR_ERREUR: &str = "Erreur";

/* ------------------------ Vocabulaire des boutons ------------------------ */

/// Opérateurs binaires du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Plus,
    Moins,
    Fois,
    Division,
}

impl OpBinaire {
    fn affichage(self) -> &'static str {
        match self {
            OpBinaire::Plus => "+",
            OpBinaire::Moins => "-",
            OpBinaire::Fois => "×",
            OpBinaire::Division => "÷",
        }
    }

    fn eval(self) -> &'static str {
        match self {
            OpBinaire::Plus => "+",
            OpBinaire::Moins => "-",
            OpBinaire::Fois => "*",
            OpBinaire::Division => "/",
        }
    }
}

/// Fonctions du pavé (le nom d'évaluation est celui du moteur).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Racine,
}

impl Fonction {
    fn affichage(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log10 => "log",
            Fonction::Ln => "ln",
            Fonction::Racine => "√",
        }
    }

    fn eval(self) -> &'static str {
        match self {
            Fonction::Sin => "Sin",
            Fonction::Cos => "Cos",
            Fonction::Tan => "Tan",
            Fonction::Log10 => "Log10",
            Fonction::Ln => "Log",
            Fonction::Racine => "Sqrt",
        }
    }
}

/// Constantes du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    fn affichage(self) -> &'static str {
        match self {
            Constante::Pi => "π",
            Constante::E => "e",
        }
    }

    fn eval(self) -> &'static str {
        match self {
            Constante::Pi => "PI",
            Constante::E => "E",
        }
    }
}

/// Commande de saisie : le type fermé qui remplace les étiquettes texte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    /// '0'..='9' ou '.'
    Chiffre(char),
    Operateur(OpBinaire),
    Ouvrante,
    Fermante,
    Pourcent,
    Fonction(Fonction),
    Constante(Constante),
    /// x² : enveloppe le dernier opérande dans Pow(·, 2).
    Carre,
    /// xʸ : ouvre Pow(·, et attend l'exposant.
    Puissance,
    Retour,
    Effacer,
    ModeAngle,
    Egal,
}

/* ------------------------ Séance ------------------------ */

#[derive(Default)]
pub struct Session {
    historique: Historique,
    mode_radians: bool,
    resultat: String,
    erreur: Option<ErreurCalc>,
}

impl Session {
    pub fn nouvelle() -> Self {
        Self::default()
    }

    /* -------- Surface de rendu (lecture seule) -------- */

    /// Expression courante, ou le marqueur après une erreur terminale.
    pub fn affichage(&self) -> &str {
        match &self.erreur {
            Some(e) if e.est_terminale() => MARQUEUR_ERREUR,
            _ => self.historique.affichage(),
        }
    }

    /// Résultat formaté, message d'erreur, ou chaîne vide.
    pub fn resultat(&self) -> String {
        match &self.erreur {
            Some(e) => format!("{MARQUEUR_ERREUR} : {e}"),
            None => self.resultat.clone(),
        }
    }

    /// Étiquette du mode d'angle.
    pub fn mode(&self) -> &'static str {
        if self.mode_radians {
            "rad"
        } else {
            "deg"
        }
    }

    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    /* -------- Surface d'entrée -------- */

    /// Point d'entrée unique : applique une commande de saisie.
    pub fn appliquer(&mut self, commande: Commande) -> Result<(), ErreurCalc> {
        debug!(?commande, "commande");
        match commande {
            Commande::Chiffre(c) => {
                self.chiffre(c);
                Ok(())
            }
            Commande::Operateur(op) => {
                self.operateur(op);
                Ok(())
            }
            Commande::Ouvrante => {
                self.saisir(Jeton::ouvrante());
                Ok(())
            }
            Commande::Fermante => {
                self.saisir(Jeton::fermante(")", ")"));
                Ok(())
            }
            Commande::Pourcent => {
                self.saisir(Jeton::nouveau("%", "%", Genre::PostfixeValeur));
                Ok(())
            }
            Commande::Fonction(f) => {
                self.fonction(f);
                Ok(())
            }
            Commande::Constante(k) => {
                self.constante(k);
                Ok(())
            }
            Commande::Carre => self.carre(),
            Commande::Puissance => self.puissance(),
            Commande::Retour => {
                self.retour();
                Ok(())
            }
            Commande::Effacer => {
                self.effacer();
                Ok(())
            }
            Commande::ModeAngle => {
                self.bascule_mode();
                Ok(())
            }
            Commande::Egal => self.egal(),
        }
    }

    pub fn chiffre(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            return;
        }
        self.saisir(Jeton::nombre(c.to_string()));
    }

    pub fn operateur(&mut self, op: OpBinaire) {
        self.saisir(Jeton::operateur(op.affichage(), op.eval()));
    }

    pub fn fonction(&mut self, f: Fonction) {
        // normalisée en "nom(" par l'historique
        self.saisir(Jeton::fonction(f.affichage(), f.eval()));
    }

    pub fn constante(&mut self, k: Constante) {
        self.saisir(Jeton::constante(k.affichage(), k.eval()));
    }

    /// Saisie commune : efface résultat + erreur, puis délègue à l'historique.
    fn saisir(&mut self, jeton: Jeton) {
        self.resultat.clear();
        self.erreur = None;
        self.historique.ajouter(jeton);
    }

    /* -------- Puissances (réécriture extraire -> épisser -> réenvelopper) -------- */

    /// x² : Pow(base, 2), groupe fermé immédiatement.
    pub fn carre(&mut self) -> Result<(), ErreurCalc> {
        let base = self.envelopper_dans_pow()?;
        for jeton in base {
            self.historique.ajouter(jeton);
        }
        self.historique.ajouter(Jeton::operateur(")^{", ","));
        self.historique.ajouter(Jeton::nombre("2"));
        self.historique.ajouter(Jeton::fermante("}", ")"));
        Ok(())
    }

    /// xʸ : Pow(base, — le groupe reste ouvert pour l'exposant à venir
    /// (auto-fermé à l'évaluation).
    pub fn puissance(&mut self) -> Result<(), ErreurCalc> {
        let base = self.envelopper_dans_pow()?;
        for jeton in base {
            self.historique.ajouter(jeton);
        }
        self.historique.ajouter(Jeton::operateur("^{", ","));
        Ok(())
    }

    /// Tronc commun : extrait le dernier opérande, l'épisse hors de
    /// l'historique, ouvre Pow( et retourne l'opérande à ré-insérer.
    /// BaseManquante laisse tout en place.
    fn envelopper_dans_pow(&mut self) -> Result<Vec<Jeton>, ErreurCalc> {
        let base = extraire_dernier_operande(self.historique.jetons());
        if base.is_empty() {
            warn!("puissance sans opérande");
            self.resultat.clear();
            self.erreur = Some(ErreurCalc::BaseManquante);
            return Err(ErreurCalc::BaseManquante);
        }

        self.resultat.clear();
        self.erreur = None;

        self.historique.retirer_suffixe(base.len());
        self.historique.ajouter(Jeton::fonction("(", "Pow"));
        Ok(base)
    }

    /* -------- Effacement -------- */

    /// Retour arrière : retire le dernier jeton.
    pub fn retour(&mut self) {
        self.resultat.clear();
        self.erreur = None;
        self.historique.retirer_dernier();
    }

    /// Remise à zéro de l'expression (le mode d'angle est conservé).
    pub fn effacer(&mut self) {
        self.historique.vider();
        self.resultat.clear();
        self.erreur = None;
    }

    pub fn bascule_mode(&mut self) {
        self.mode_radians = !self.mode_radians;
    }

    /* -------- Évaluation -------- */

    /// "=" : évalue, puis ré-amorce l'historique avec le résultat.
    /// Sur erreur d'évaluation, l'historique est vidé sans condition.
    pub fn egal(&mut self) -> Result<(), ErreurCalc> {
        match evaluer(&self.historique, self.mode_radians) {
            Ok(Issue::Neutre) => {
                self.resultat.clear();
                self.erreur = None;
                Ok(())
            }
            Ok(Issue::Litteral(texte)) => {
                // littéral : l'état reste en place, le texte est le résultat
                self.resultat = texte;
                self.erreur = None;
                Ok(())
            }
            Ok(Issue::Valeur(texte)) => {
                debug!(resultat = %texte, "évaluation réussie");
                self.historique.vider();
                self.historique.ajouter(Jeton::nombre(texte.clone()));
                self.resultat = texte;
                self.erreur = None;
                Ok(())
            }
            Err(e) => {
                warn!(erreur = %e, "évaluation échouée");
                self.historique.vider();
                self.resultat.clear();
                self.erreur = Some(e.clone());
                Err(e)
            }
        }
    }
}
