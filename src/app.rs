// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (toute la fenêtre, pas de champ texte) :
// - texte tapé        -> Touche::depuis_caractere (+ - * / _ % = c, chiffres, .)
// - Enter             -> "="
// - Backspace         -> DEL
// - Escape            -> C

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Touche;

/// Événements clavier de la frame -> touches, dans l’ordre d’arrivée.
fn touches_clavier(events: &[egui::Event]) -> Vec<Touche> {
    let mut out = Vec::new();
    for ev in events {
        match ev {
            egui::Event::Text(t) => out.extend(t.chars().map(Touche::depuis_caractere)),
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => out.push(Touche::Egal),
                egui::Key::Backspace => out.push(Touche::Supprimer),
                egui::Key::Escape => out.push(Touche::Effacer),
                _ => {}
            },
            _ => {}
        }
    }
    out
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Une touche = une opération complète, appliquée AVANT le dessin.
        let touches = ctx.input(|i| touches_clavier(&i.events));
        for t in touches {
            self.appuyer(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
