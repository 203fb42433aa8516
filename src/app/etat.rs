//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder UNE calculatrice (une session) et traduire touches et
//! clavier en opérations du noyau.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Calculatrice`.
//! - Une touche = une opération complète du noyau, jamais deux entrelacées.

use crate::noyau::format::format_affichage;
use crate::noyau::{Calculatrice, Edition, Op};

/// Touches de la calculatrice (pavé ou clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Chiffre ou "." ; tout autre caractère sera refusé par le noyau.
    Chiffre(char),
    Operateur(Op),
    Signe,
    Pourcentage,
    Egal,
    Effacer,
    Supprimer,
}

impl Touche {
    /// Caractère tapé au clavier -> touche.
    ///
    /// `_` = ±, `%` = pourcentage, `=` = égal, `c` = effacer.
    pub fn depuis_caractere(c: char) -> Touche {
        match c {
            '+' => Touche::Operateur(Op::Plus),
            '-' => Touche::Operateur(Op::Minus),
            '*' => Touche::Operateur(Op::Star),
            '/' => Touche::Operateur(Op::Slash),
            '_' => Touche::Signe,
            '%' => Touche::Pourcentage,
            '=' => Touche::Egal,
            'c' => Touche::Effacer,
            _ => Touche::Chiffre(c),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub calc: Calculatrice,

    // message d’erreur du dernier "=" (vide si aucun)
    pub erreur: String,
}

impl AppCalc {
    /// Applique une touche. L’erreur éventuelle reste affichée jusqu’à la
    /// prochaine édition appliquée.
    pub fn appuyer(&mut self, touche: Touche) -> Edition {
        let issue = match touche {
            Touche::Chiffre(c) => Ok(self.calc.add_digit(c)),
            Touche::Operateur(op) => Ok(self.calc.add_operator(op)),
            Touche::Signe => Ok(self.calc.toggle_sign()),
            Touche::Pourcentage => Ok(self.calc.percentage()),
            Touche::Egal => self.calc.evaluate(),
            Touche::Effacer => Ok(self.calc.clear()),
            Touche::Supprimer => Ok(self.calc.delete_last()),
        };

        match issue {
            Ok(edition) => {
                if edition.appliquee() {
                    self.erreur.clear();
                }
                edition
            }
            Err(e) => {
                self.erreur = e.to_string();
                Edition::Ignoree
            }
        }
    }

    /// Texte de l’écran, avec les glyphes − × ÷.
    pub fn affichage(&self) -> String {
        format_affichage(&self.calc.expr())
    }
}
