// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé tactile : gros boutons, grille régulière
// - Deux zones lecture seule : expression en cours + résultat
// - Le bouton de mode porte l'étiquette deg/rad de la séance
//
// Note :
// - La vue ne fabrique AUCUN jeton : chaque bouton émet une Commande,
//   la séance applique ses propres règles (× implicite, garde décimale...).

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Commande, Constante, Fonction, OpBinaire};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_ecrans(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);
            });
    }

    fn ui_ecrans(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");
        Self::champ_monospace(ui, "expression_out", self.expression(), 2);

        ui.add_space(6.0);

        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat(), 2);
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", "Efface l'expression", Commande::Effacer);
                self.bouton(ui, "DEL", "Retire le dernier jeton", Commande::Retour);
                self.bouton(ui, "(", "Ouvre un groupe", Commande::Ouvrante);
                self.bouton(ui, ")", "Ferme un groupe", Commande::Fermante);
                ui.end_row();

                self.bouton(ui, "sin", "Sinus", Commande::Fonction(Fonction::Sin));
                self.bouton(ui, "cos", "Cosinus", Commande::Fonction(Fonction::Cos));
                self.bouton(ui, "tan", "Tangente", Commande::Fonction(Fonction::Tan));
                // l'étiquette reflète le mode courant de la séance
                self.bouton(ui, self.mode(), "Bascule degrés/radians", Commande::ModeAngle);
                ui.end_row();

                self.bouton(ui, "ln", "Logarithme népérien", Commande::Fonction(Fonction::Ln));
                self.bouton(ui, "log", "Logarithme décimal", Commande::Fonction(Fonction::Log10));
                self.bouton(ui, "√", "Racine carrée", Commande::Fonction(Fonction::Racine));
                self.bouton(ui, "π", "Pi", Commande::Constante(Constante::Pi));
                ui.end_row();

                self.bouton(ui, "e", "Constante d'Euler", Commande::Constante(Constante::E));
                self.bouton(ui, "x²", "Carré du dernier opérande", Commande::Carre);
                self.bouton(ui, "xʸ", "Puissance libre", Commande::Puissance);
                self.bouton(ui, "%", "Pourcentage", Commande::Pourcent);
                ui.end_row();

                self.bouton(ui, "7", "", Commande::Chiffre('7'));
                self.bouton(ui, "8", "", Commande::Chiffre('8'));
                self.bouton(ui, "9", "", Commande::Chiffre('9'));
                self.bouton(ui, "÷", "", Commande::Operateur(OpBinaire::Division));
                ui.end_row();

                self.bouton(ui, "4", "", Commande::Chiffre('4'));
                self.bouton(ui, "5", "", Commande::Chiffre('5'));
                self.bouton(ui, "6", "", Commande::Chiffre('6'));
                self.bouton(ui, "×", "", Commande::Operateur(OpBinaire::Fois));
                ui.end_row();

                self.bouton(ui, "1", "", Commande::Chiffre('1'));
                self.bouton(ui, "2", "", Commande::Chiffre('2'));
                self.bouton(ui, "3", "", Commande::Chiffre('3'));
                self.bouton(ui, "-", "", Commande::Operateur(OpBinaire::Moins));
                ui.end_row();

                self.bouton(ui, "0", "", Commande::Chiffre('0'));
                self.bouton(ui, ".", "", Commande::Chiffre('.'));
                self.bouton(ui, "=", "Évalue l'expression", Commande::Egal);
                self.bouton(ui, "+", "", Commande::Operateur(OpBinaire::Plus));
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, commande: Commande) {
        let mut resp = ui.add_sized([56.0, 32.0], egui::Button::new(label));
        if !tip.is_empty() {
            resp = resp.on_hover_text(tip);
        }
        if resp.clicked() {
            self.appuyer(commande);
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        // On garde un cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }
}
