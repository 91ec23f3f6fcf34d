//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la surface d'entrée sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - séquences de commandes bornées
//! - budget temps global
//! - on accepte les erreurs de la taxonomie (division par zéro, expression
//!   invalide, base manquante, dépassement) — jamais de panique
//! - invariants clés : reconstruire() reproduit les caches à l'octet près,
//!   et après une erreur terminale l'historique est vide

use std::time::{Duration, Instant};

use super::session::{Commande, Constante, Fonction, OpBinaire, Session};
use super::ErreurCalc;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de commandes (bornée) ------------------------ */

fn gen_commande(rng: &mut Rng) -> Commande {
    match rng.pick(18) {
        0..=5 => {
            let chiffres = ['0', '1', '2', '3', '5', '7', '9', '.'];
            Commande::Chiffre(chiffres[rng.pick(chiffres.len() as u32) as usize])
        }
        6 => Commande::Operateur(OpBinaire::Plus),
        7 => Commande::Operateur(OpBinaire::Moins),
        8 => Commande::Operateur(OpBinaire::Fois),
        9 => Commande::Operateur(OpBinaire::Division),
        10 => Commande::Ouvrante,
        11 => Commande::Fermante,
        12 => Commande::Pourcent,
        13 => {
            let fonctions = [
                Fonction::Sin,
                Fonction::Cos,
                Fonction::Tan,
                Fonction::Racine,
                Fonction::Ln,
                Fonction::Log10,
            ];
            Commande::Fonction(fonctions[rng.pick(6) as usize])
        }
        14 => Commande::Constante(if rng.pick(2) == 0 {
            Constante::Pi
        } else {
            Constante::E
        }),
        15 => Commande::Carre,
        16 => Commande::Puissance,
        _ => Commande::Retour,
    }
}

/* ------------------------ Invariants ------------------------ */

/// reconstruire() doit reproduire les caches à l'octet près (et être
/// idempotent) — on le vérifie sur une copie de l'historique.
fn check_caches_reproductibles(session: &Session) {
    let mut copie = session.historique().clone();
    copie.reconstruire(true);
    assert_eq!(copie.affichage(), session.historique().affichage());
    assert_eq!(copie.evaluation(), session.historique().evaluation());
    assert_eq!(copie.profondeur(), session.historique().profondeur());
}

fn est_erreur_de_taxonomie(e: &ErreurCalc) -> bool {
    matches!(
        e,
        ErreurCalc::BaseManquante
            | ErreurCalc::DivisionParZero
            | ErreurCalc::ExpressionInvalide
            | ErreurCalc::DepassementNumerique
    )
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_saisie_deterministe_et_caches() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes séquences => mêmes états (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..60 {
        budget(t0, max);

        let mut session = Session::nouvelle();
        for _ in 0..40 {
            let commande = gen_commande(&mut rng);
            if let Err(e) = session.appliquer(commande) {
                assert!(est_erreur_de_taxonomie(&e), "erreur hors taxonomie: {e}");
            }
        }

        check_caches_reproductibles(&session);
    }
}

#[test]
fn fuzz_safe_egal_ne_panique_jamais() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..80 {
        budget(t0, max);

        let mut session = Session::nouvelle();
        for _ in 0..16 {
            let _ = session.appliquer(gen_commande(&mut rng));
        }

        match session.appliquer(Commande::Egal) {
            Ok(()) => {
                vus_ok += 1;
                // sur succès, l'historique est soit le littéral resté en
                // place, soit le résultat ré-amorcé — jamais un état bâtard
                check_caches_reproductibles(&session);
            }
            Err(e) => {
                assert!(est_erreur_de_taxonomie(&e), "erreur hors taxonomie: {e}");
                assert_eq!(
                    session.historique().longueur(),
                    0,
                    "erreur terminale => historique vide"
                );
                vus_err += 1;
            }
        }

        // reprise : une saisie après "=" repart toujours proprement
        session.chiffre('7');
        check_caches_reproductibles(&session);
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vus_ok > 5, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_retour_arriere_total() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..40 {
        budget(t0, max);

        let mut session = Session::nouvelle();
        for _ in 0..24 {
            let _ = session.appliquer(gen_commande(&mut rng));
        }

        // DEL jusqu'au bout : on doit retomber exactement sur l'état vide
        let bornes = session.historique().longueur() + 4;
        for _ in 0..bornes {
            session.retour();
        }
        assert_eq!(session.historique().longueur(), 0);
        assert_eq!(session.historique().affichage(), "");
        assert_eq!(session.historique().evaluation(), "");
        assert_eq!(session.historique().profondeur(), 0);
    }
}
