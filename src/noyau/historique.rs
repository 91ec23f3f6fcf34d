// src/noyau/historique.rs
//
// Historique des jetons : journal ordonné et mutable de la saisie.
//
// Les deux chaînes (affichage, évaluation) et la profondeur de parenthèses
// sont des CACHES : elles restent toujours reproductibles par un pli sur la
// suite de jetons (reconstruire). Aucune mutation partielle n'est jamais
// visible — ajouter() aboutit entièrement ou rejette avant de toucher quoi
// que ce soit (cas du point décimal en double).
//
// Règles d'ajout, dans l'ordre:
// 1. normalisation fonction : un appel ouvre toujours un groupe ("Sin" -> "Sin(")
// 2. garde décimale : "." rejeté si le nombre en cours a déjà un point
// 3. multiplication implicite entre deux valeurs adjacentes
// 4. zéro de tête devant un "." qui ne suit pas une valeur
// 5. ajout du jeton + extension des caches
// 6. profondeur : ouvrante/fonction +1, fermante -1 (plancher 0)

use super::jetons::{prolonge_nombre, Genre, Jeton};

#[derive(Clone, Debug, Default)]
pub struct Historique {
    jetons: Vec<Jeton>,
    affichage: String,
    evaluation: String,
    profondeur: usize,
}

impl Historique {
    pub fn nouveau() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn evaluation(&self) -> &str {
        &self.evaluation
    }

    pub fn profondeur(&self) -> usize {
        self.profondeur
    }

    pub fn est_vide(&self) -> bool {
        self.jetons.is_empty()
    }

    pub fn longueur(&self) -> usize {
        self.jetons.len()
    }

    /// Tous les jetons sont des fragments de nombre (chiffres ou point) ?
    /// Vrai pour "123" ou "0.5" — il n'y a alors rien à calculer.
    pub fn que_des_nombres(&self) -> bool {
        !self.jetons.is_empty() && self.jetons.iter().all(|j| j.genre == Genre::Nombre)
    }

    /* ------------------------ Ajout ------------------------ */

    /// Ajoute un jeton en appliquant les règles de saisie.
    /// Ne retourne rien : l'appel peut être un non-événement (garde décimale)
    /// ou synthétiser des jetons supplémentaires (× implicite, zéro de tête).
    pub fn ajouter(&mut self, jeton: Jeton) {
        let mut jeton = jeton;

        // 1) Normalisation fonction : les deux formes finissent par "(".
        if jeton.genre == Genre::Fonction {
            if !jeton.affichage.ends_with('(') {
                jeton.affichage.push('(');
            }
            if !jeton.eval.ends_with('(') {
                jeton.eval.push('(');
            }
        }

        // 2) Garde décimale, AVANT toute mutation : si le nombre en cours a
        //    déjà un point, l'appel entier est abandonné (rien n'est inséré,
        //    pas même un × implicite).
        if jeton.est_point() && self.segment_nombre_courant().contains('.') {
            return;
        }

        // 3) Multiplication implicite entre une valeur terminée et une valeur
        //    qui commence, sauf prolongation du même littéral.
        if let Some(dernier) = self.jetons.last() {
            if dernier.produit_valeur()
                && jeton.demarre_valeur()
                && !prolonge_nombre(dernier, &jeton)
            {
                self.pousser(Jeton::fois_implicite());
            }
        }

        // 4) Zéro de tête : "." isolé devient "0." (le × implicite éventuel
        //    vient d'être inséré, donc last() est bien l'état effectif).
        if jeton.est_point() {
            let suit_valeur = self.jetons.last().is_some_and(|j| j.produit_valeur());
            if !suit_valeur {
                self.pousser(Jeton::nombre("0"));
            }
        }

        // 5 + 6) Ajout définitif.
        self.pousser(jeton);
    }

    /// Pli élémentaire : jeton -> caches. Seule opération rejouée par
    /// reconstruire() — les règles 1 à 4 sont des décisions de saisie,
    /// prises une seule fois.
    fn pousser(&mut self, jeton: Jeton) {
        self.affichage.push_str(&jeton.affichage);
        self.evaluation.push_str(&jeton.eval);
        self.incrementer_profondeur(&jeton);
        self.jetons.push(jeton);
    }

    fn incrementer_profondeur(&mut self, jeton: &Jeton) {
        match jeton.genre {
            Genre::Ouvrante => self.profondeur += 1,
            Genre::Fonction if jeton.eval.ends_with('(') => self.profondeur += 1,
            Genre::Fermante => self.profondeur = self.profondeur.saturating_sub(1),
            _ => {}
        }
    }

    /// Fragment d'évaluation du nombre en cours de saisie (balayage arrière
    /// sur les jetons Nombre consécutifs).
    fn segment_nombre_courant(&self) -> String {
        let mut segment = String::new();
        for jeton in self.jetons.iter().rev() {
            if jeton.genre != Genre::Nombre {
                break;
            }
            segment.insert_str(0, &jeton.eval);
        }
        segment
    }

    /* ------------------------ Reconstruction ------------------------ */

    /// Recalcule les caches par pli sur la suite de jetons. Idempotent.
    /// À appeler après toute mutation structurelle hors ajouter().
    pub fn reconstruire(&mut self, recalcule_profondeur: bool) {
        let mut affichage = String::new();
        let mut evaluation = String::new();
        let mut profondeur = 0usize;

        for jeton in &self.jetons {
            affichage.push_str(&jeton.affichage);
            evaluation.push_str(&jeton.eval);
            match jeton.genre {
                Genre::Ouvrante => profondeur += 1,
                Genre::Fonction if jeton.eval.ends_with('(') => profondeur += 1,
                Genre::Fermante => profondeur = profondeur.saturating_sub(1),
                _ => {}
            }
        }

        self.affichage = affichage;
        self.evaluation = evaluation;
        if recalcule_profondeur {
            self.profondeur = profondeur;
        }
    }

    /* ------------------------ Mutations structurelles ------------------------ */

    /// Retour arrière : retire le dernier jeton.
    pub fn retirer_dernier(&mut self) {
        if self.jetons.pop().is_some() {
            self.reconstruire(true);
        }
    }

    /// Épissure sanctionnée (réécriture puissance) : retire les n derniers
    /// jetons puis resynchronise les caches.
    pub fn retirer_suffixe(&mut self, n: usize) {
        let garde = self.jetons.len().saturating_sub(n);
        self.jetons.truncate(garde);
        self.reconstruire(true);
    }

    pub fn vider(&mut self) {
        self.jetons.clear();
        self.affichage.clear();
        self.evaluation.clear();
        self.profondeur = 0;
    }
}
