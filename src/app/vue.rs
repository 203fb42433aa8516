// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Un clic = une touche = une opération du noyau (puis la frame redessine)
// - Tactile : gros boutons en grille 4 colonnes

use eframe::egui;

use super::etat::{AppCalc, Touche};
use crate::noyau::format::format_nombre;
use crate::noyau::Op;

/// Pavé : (libellé, touche), ligne par ligne.
const PAVE: [[(&str, Touche); 4]; 5] = [
    [
        ("C", Touche::Effacer),
        ("DEL", Touche::Supprimer),
        ("%", Touche::Pourcentage),
        ("÷", Touche::Operateur(Op::Slash)),
    ],
    [
        ("7", Touche::Chiffre('7')),
        ("8", Touche::Chiffre('8')),
        ("9", Touche::Chiffre('9')),
        ("×", Touche::Operateur(Op::Star)),
    ],
    [
        ("4", Touche::Chiffre('4')),
        ("5", Touche::Chiffre('5')),
        ("6", Touche::Chiffre('6')),
        ("−", Touche::Operateur(Op::Minus)),
    ],
    [
        ("1", Touche::Chiffre('1')),
        ("2", Touche::Chiffre('2')),
        ("3", Touche::Chiffre('3')),
        ("+", Touche::Operateur(Op::Plus)),
    ],
    [
        ("±", Touche::Signe),
        ("0", Touche::Chiffre('0')),
        (".", Touche::Chiffre('.')),
        ("=", Touche::Egal),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();
        self.ui_demarche(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let texte = self.affichage();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // écran vide : on garde la hauteur
                    let texte = if texte.is_empty() { " " } else { texte.as_str() };
                    let mut riche = egui::RichText::new(texte).monospace().size(28.0);
                    // résultat tout frais : le prochain chiffre l’écrasera
                    if self.calc.just_evaluated() && !self.calc.expr().is_empty() {
                        riche = riche.strong();
                    }
                    ui.label(riche);
                });
            });

        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (label, touche) in ligne {
                        let resp = ui.add_sized([64.0, 44.0], egui::Button::new(label));
                        if resp.clicked() {
                            self.appuyer(touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_demarche(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| match self.calc.demarche() {
                Some(d) => {
                    ui.monospace(format!("Infixe  : {}", d.infixe));
                    ui.monospace(format!("Postfix : {}", d.postfix));
                    ui.monospace(format!("Brut    : {}", format_nombre(d.valeur)));
                }
                None => {
                    ui.monospace("aucun calcul");
                }
            });
    }
}
