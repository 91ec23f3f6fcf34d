//! Tests de parcours (campagne) : des séquences de boutons complètes,
//! du premier chiffre au "=", vérifiées sur les deux chaînes dérivées
//! et sur le résultat formaté.
//!
//! Notes (aligné avec l'état actuel du noyau) :
//! - Le mode degrés est le mode de départ d'une séance.
//! - Après "=", l'historique est ré-amorcé avec le résultat : les parcours
//!   enchaînés ci-dessous en dépendent.
//! - Les erreurs d'évaluation sont terminales : l'historique est vidé,
//!   l'affichage montre le marqueur.

use super::session::{Commande, Constante, Fonction, OpBinaire, Session};
use super::ErreurCalc;

fn tape(s: &mut Session, commandes: &[Commande]) {
    for c in commandes {
        let _ = s.appliquer(*c);
    }
}

fn chiffres(s: &mut Session, texte: &str) {
    for c in texte.chars() {
        s.chiffre(c);
    }
}

/* ------------------------ Arithmétique de base ------------------------ */

#[test]
fn parcours_addition() {
    let mut s = Session::nouvelle();
    chiffres(&mut s, "12");
    s.operateur(OpBinaire::Plus);
    chiffres(&mut s, "34");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "46");
}

#[test]
fn parcours_priorites() {
    let mut s = Session::nouvelle();
    chiffres(&mut s, "2");
    s.operateur(OpBinaire::Plus);
    chiffres(&mut s, "3");
    s.operateur(OpBinaire::Fois);
    chiffres(&mut s, "4");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "14");
}

#[test]
fn parcours_division_decimale() {
    let mut s = Session::nouvelle();
    chiffres(&mut s, "7");
    s.operateur(OpBinaire::Division);
    chiffres(&mut s, "2");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "3.5");
}

#[test]
fn parcours_division_par_zero() {
    let mut s = Session::nouvelle();
    chiffres(&mut s, "1");
    s.operateur(OpBinaire::Division);
    chiffres(&mut s, "0");
    assert_eq!(s.egal(), Err(ErreurCalc::DivisionParZero));
    assert_eq!(s.affichage(), "Erreur");
    assert_eq!(s.historique().longueur(), 0);
}

/* ------------------------ Multiplication implicite ------------------------ */

#[test]
fn parcours_deux_pi() {
    let mut s = Session::nouvelle();
    chiffres(&mut s, "2");
    s.constante(Constante::Pi);
    assert_eq!(s.historique().evaluation(), "2*PI");
    assert_eq!(s.historique().affichage(), "2×π");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "6.283185307");
}

#[test]
fn parcours_groupe_accole() {
    // 2(3+4) => 2*(3+4) = 14
    let mut s = Session::nouvelle();
    chiffres(&mut s, "2");
    tape(
        &mut s,
        &[
            Commande::Ouvrante,
            Commande::Chiffre('3'),
            Commande::Operateur(OpBinaire::Plus),
            Commande::Chiffre('4'),
            Commande::Fermante,
        ],
    );
    assert_eq!(s.historique().evaluation(), "2*(3+4)");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "14");
}

#[test]
fn parcours_fonction_accolee() {
    // 2 sin(30 => 2*Sin(30, auto-fermé, = 1 en degrés
    let mut s = Session::nouvelle();
    chiffres(&mut s, "2");
    s.fonction(Fonction::Sin);
    chiffres(&mut s, "30");
    assert_eq!(s.historique().evaluation(), "2*Sin(30");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "1");
}

/* ------------------------ Saisie décimale ------------------------ */

#[test]
fn parcours_point_initial() {
    let mut s = Session::nouvelle();
    s.chiffre('.');
    assert_eq!(s.historique().evaluation(), "0.");
    chiffres(&mut s, "5");
    s.operateur(OpBinaire::Fois);
    chiffres(&mut s, "4");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "2");
}

#[test]
fn parcours_double_point_rejete() {
    let mut s = Session::nouvelle();
    chiffres(&mut s, "1.5");
    let longueur = s.historique().longueur();
    s.chiffre('.');
    assert_eq!(s.historique().longueur(), longueur);
    assert_eq!(s.historique().evaluation(), "1.5");
}

#[test]
fn parcours_second_nombre_a_point() {
    // 1.5 + 2.5 : la garde décimale est bornée au nombre en cours
    let mut s = Session::nouvelle();
    chiffres(&mut s, "1.5");
    s.operateur(OpBinaire::Plus);
    chiffres(&mut s, "2.5");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "4");
}

/* ------------------------ Puissances ------------------------ */

#[test]
fn parcours_carre_apres_somme() {
    let mut s = Session::nouvelle();
    chiffres(&mut s, "3");
    s.operateur(OpBinaire::Plus);
    chiffres(&mut s, "4");
    tape(&mut s, &[Commande::Carre]);
    assert_eq!(s.historique().evaluation(), "3+Pow(4,2)");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "19");
}

#[test]
fn parcours_carre_enchaine() {
    // 2 x² x² => Pow(Pow(2,2),2) = 16
    let mut s = Session::nouvelle();
    chiffres(&mut s, "2");
    tape(&mut s, &[Commande::Carre, Commande::Carre]);
    assert_eq!(s.historique().evaluation(), "Pow(Pow(2,2),2)");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "16");
}

#[test]
fn parcours_exposant_libre() {
    // 5 xʸ 3 = 125, le groupe est auto-fermé au "="
    let mut s = Session::nouvelle();
    chiffres(&mut s, "5");
    tape(&mut s, &[Commande::Puissance]);
    chiffres(&mut s, "3");
    assert_eq!(s.historique().evaluation(), "Pow(5,3");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "125");
}

#[test]
fn parcours_carre_sans_base() {
    let mut s = Session::nouvelle();
    assert_eq!(s.appliquer(Commande::Carre), Err(ErreurCalc::BaseManquante));
    // l'état reste sain
    chiffres(&mut s, "9");
    tape(&mut s, &[Commande::Carre]);
    s.egal().unwrap();
    assert_eq!(s.resultat(), "81");
}

/* ------------------------ Pourcents ------------------------ */

#[test]
fn parcours_pourcent_simple() {
    let mut s = Session::nouvelle();
    chiffres(&mut s, "50");
    tape(&mut s, &[Commande::Pourcent, Commande::Egal]);
    assert_eq!(s.resultat(), "0.5");
}

#[test]
fn parcours_pourcent_d_un_groupe() {
    let mut s = Session::nouvelle();
    tape(
        &mut s,
        &[
            Commande::Ouvrante,
            Commande::Chiffre('2'),
            Commande::Operateur(OpBinaire::Plus),
            Commande::Chiffre('3'),
            Commande::Fermante,
            Commande::Pourcent,
        ],
    );
    assert_eq!(s.historique().evaluation(), "(2+3)%");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "0.05");
}

#[test]
fn parcours_majoration() {
    // 200 × 10% = 20
    let mut s = Session::nouvelle();
    chiffres(&mut s, "200");
    s.operateur(OpBinaire::Fois);
    chiffres(&mut s, "10");
    tape(&mut s, &[Commande::Pourcent, Commande::Egal]);
    assert_eq!(s.resultat(), "20");
}

/* ------------------------ Trigonométrie + mode d'angle ------------------------ */

#[test]
fn parcours_sin_90_degres() {
    let mut s = Session::nouvelle();
    s.fonction(Fonction::Sin);
    chiffres(&mut s, "90");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "1");
}

#[test]
fn parcours_sin_90_radians() {
    let mut s = Session::nouvelle();
    s.bascule_mode();
    assert_eq!(s.mode(), "rad");
    s.fonction(Fonction::Sin);
    chiffres(&mut s, "90");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "0.8939966636");
}

#[test]
fn parcours_tan_90_degres_echoue() {
    let mut s = Session::nouvelle();
    s.fonction(Fonction::Tan);
    chiffres(&mut s, "90");
    assert_eq!(s.egal(), Err(ErreurCalc::DivisionParZero));
}

#[test]
fn parcours_cos_pi_radians() {
    let mut s = Session::nouvelle();
    s.bascule_mode();
    s.fonction(Fonction::Cos);
    s.constante(Constante::Pi);
    s.egal().unwrap();
    assert_eq!(s.resultat(), "-1");
}

#[test]
fn parcours_racine_et_log() {
    let mut s = Session::nouvelle();
    s.fonction(Fonction::Racine);
    chiffres(&mut s, "16");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "4");

    s.effacer();
    s.fonction(Fonction::Log10);
    chiffres(&mut s, "1000");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "3");

    s.effacer();
    s.fonction(Fonction::Ln);
    s.constante(Constante::E);
    s.egal().unwrap();
    assert_eq!(s.resultat(), "1");
}

/* ------------------------ Enchaînements après "=" ------------------------ */

#[test]
fn parcours_calcul_en_chaine() {
    let mut s = Session::nouvelle();
    chiffres(&mut s, "3");
    s.operateur(OpBinaire::Plus);
    chiffres(&mut s, "4");
    s.egal().unwrap();

    // le résultat 7 amorce l'expression suivante
    s.operateur(OpBinaire::Fois);
    chiffres(&mut s, "2");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "14");
}

#[test]
fn parcours_notation_scientifique_reinjectee() {
    // un résultat en notation scientifique reste exploitable
    let mut s = Session::nouvelle();
    chiffres(&mut s, "2");
    tape(&mut s, &[Commande::Puissance]);
    chiffres(&mut s, "50");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "1.125900E15");

    // le résultat ré-amorcé est le texte arrondi, pas la valeur exacte
    s.operateur(OpBinaire::Division);
    chiffres(&mut s, "2");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "5.629500E14");
}

#[test]
fn parcours_reprise_apres_erreur() {
    let mut s = Session::nouvelle();
    s.fonction(Fonction::Tan);
    chiffres(&mut s, "90");
    let _ = s.egal();
    assert_eq!(s.historique().longueur(), 0);

    chiffres(&mut s, "5");
    s.operateur(OpBinaire::Plus);
    chiffres(&mut s, "5");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "10");
}

/* ------------------------ Effacement ------------------------ */

#[test]
fn parcours_retour_sur_fonction() {
    // DEL retire le jeton fonction entier, pas un caractère
    let mut s = Session::nouvelle();
    chiffres(&mut s, "2");
    s.fonction(Fonction::Sin);
    assert_eq!(s.historique().evaluation(), "2*Sin(");
    s.retour();
    assert_eq!(s.historique().evaluation(), "2*");
    s.retour();
    s.retour();
    assert_eq!(s.historique().evaluation(), "");
}

#[test]
fn parcours_effacer_puis_reprendre() {
    let mut s = Session::nouvelle();
    chiffres(&mut s, "123");
    s.effacer();
    assert_eq!(s.affichage(), "");
    chiffres(&mut s, "45");
    s.egal().unwrap();
    assert_eq!(s.resultat(), "45");
}
