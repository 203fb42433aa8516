//! src/noyau/calculatrice.rs
//!
//! Machine d’état de la saisie.
//!
//! Contrats :
//! - L’expression est une suite typée de jetons : Num, Op, Num, ..., (Op).
//!   Jamais d’opérateur en tête, jamais deux opérateurs de suite.
//! - Toute édition impossible est ignorée (état intact) et le dit :
//!   `Edition::Ignoree`. Aucune panique sur une touche.
//! - Le texte "2 + 3 " n’existe qu’à la sérialisation (`expr()`).

use tracing::{debug, warn};

use super::erreur::ErreurNoyau;
use super::eval::{eval_tokens, Demarche};
use super::format::{format_nombre, format_resultat};
use super::jetons::{format_tokens, parse_nombre, Op, Tok, SEPARATEUR};

/// Longueur max de l’affichage (en caractères).
pub const LONGUEUR_MAX: usize = 24;

/// Décimales gardées après "=".
pub const DECIMALES: u32 = 7;

/// Au-delà (en valeur absolue), le résultat passe en notation scientifique.
pub const SEUIL_SCIENTIFIQUE: f64 = 999_999_999.0;

/// Chiffres après la virgule en notation scientifique.
pub const CHIFFRES_SCIENTIFIQUES: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    pub longueur_max: usize,
    pub decimales: u32,
    pub seuil_scientifique: f64,
    pub chiffres_scientifiques: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            longueur_max: LONGUEUR_MAX,
            decimales: DECIMALES,
            seuil_scientifique: SEUIL_SCIENTIFIQUE,
            chiffres_scientifiques: CHIFFRES_SCIENTIFIQUES,
        }
    }
}

/// Issue d’une édition : appliquée, ou ignorée sans toucher à l’état.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edition {
    Appliquee,
    Ignoree,
}

impl Edition {
    pub fn appliquee(self) -> bool {
        self == Edition::Appliquee
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Calculatrice {
    jetons: Vec<Tok>,

    // vrai après "=" (et au démarrage) : le prochain chiffre repart de zéro
    just_evaluated: bool,

    reglages: Reglages,
    demarche: Option<Demarche>,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

impl Calculatrice {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            jetons: Vec::new(),
            just_evaluated: true,
            reglages,
            demarche: None,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    /// Expression courante, opérateurs entourés d’espaces ("5 + ", "5 + 3").
    pub fn expr(&self) -> String {
        let mut s = format_tokens(&self.jetons);
        if self.ends_with_op() {
            s.push(SEPARATEUR);
        }
        s
    }

    #[cfg(test)]
    pub fn jetons(&self) -> &[Tok] {
        &self.jetons
    }

    pub fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    #[cfg(test)]
    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    /// Démarche du dernier "=" réussi.
    pub fn demarche(&self) -> Option<&Demarche> {
        self.demarche.as_ref()
    }

    fn ends_with_op(&self) -> bool {
        self.jetons.last().is_some_and(Tok::est_op)
    }

    /// Longueur affichée, sans construire la chaîne.
    fn longueur(&self) -> usize {
        let texte: usize = self
            .jetons
            .iter()
            .map(|t| match t {
                Tok::Num(s) => s.chars().count(),
                Tok::Op(_) => 1,
            })
            .sum();
        let espaces = self.jetons.len().saturating_sub(1) + usize::from(self.ends_with_op());
        texte + espaces
    }

    fn numeral_courant(&self) -> Option<&str> {
        match self.jetons.last() {
            Some(Tok::Num(n)) => Some(n.as_str()),
            _ => None,
        }
    }

    fn journal(&self, operation: &'static str, edition: Edition) -> Edition {
        debug!(operation, ?edition, expr = %self.expr(), "édition");
        edition
    }

    /* ------------------------ Éditions ------------------------ */

    /// Ajoute un chiffre ou ".".
    ///
    /// Refusé si : autre caractère, affichage déjà plein, ou second "." dans le
    /// numéral en cours (ni "." après un exposant). Après "=", le résultat est
    /// d’abord effacé.
    pub fn add_digit(&mut self, c: char) -> Edition {
        if !(c.is_ascii_digit() || c == '.') || self.longueur() >= self.reglages.longueur_max {
            return self.journal("add_digit", Edition::Ignoree);
        }
        if c == '.'
            && !self.just_evaluated
            && self
                .numeral_courant()
                .is_some_and(|n| n.contains(|x: char| x == '.' || x == 'e'))
        {
            return self.journal("add_digit", Edition::Ignoree);
        }

        if self.just_evaluated {
            self.jetons.clear();
        }
        match self.jetons.last_mut() {
            Some(Tok::Num(n)) => n.push(c),
            _ => self.jetons.push(Tok::Num(c.to_string())),
        }
        self.just_evaluated = false;

        self.journal("add_digit", Edition::Appliquee)
    }

    /// Ajoute un opérateur ; s’il y en a déjà un en fin, il est REMPLACÉ.
    pub fn add_operator(&mut self, op: Op) -> Edition {
        if self.jetons.is_empty() {
            return self.journal("add_operator", Edition::Ignoree);
        }

        if self.ends_with_op() {
            self.jetons.pop();
        }
        self.jetons.push(Tok::Op(op));
        self.just_evaluated = false;

        self.journal("add_operator", Edition::Appliquee)
    }

    /// ± sur le dernier numéral (sur sa valeur, pas sur le texte).
    pub fn toggle_sign(&mut self) -> Edition {
        let e = self.modifie_numeral(|v| if v > 0.0 { -v.abs() } else { v.abs() });
        self.journal("toggle_sign", e)
    }

    /// % : dernier numéral divisé par 100.
    pub fn percentage(&mut self) -> Edition {
        let e = self.modifie_numeral(|v| v / 100.0);
        self.journal("percentage", e)
    }

    fn modifie_numeral(&mut self, f: impl FnOnce(f64) -> f64) -> Edition {
        let Some(Tok::Num(n)) = self.jetons.last_mut() else {
            return Edition::Ignoree;
        };
        let Some(v) = parse_nombre(n) else {
            return Edition::Ignoree;
        };
        *n = format_nombre(f(v));
        Edition::Appliquee
    }

    /// "=" : calcule, arrondit, remplace l’expression par le résultat.
    ///
    /// Ignoré si l’expression est vide ou finit par un opérateur.
    /// Erreur (état intact) si le calcul échoue ou donne un non-fini.
    pub fn evaluate(&mut self) -> Result<Edition, ErreurNoyau> {
        if self.jetons.is_empty() || self.ends_with_op() {
            return Ok(self.journal("evaluate", Edition::Ignoree));
        }

        let demarche = eval_tokens(&self.jetons)?;
        if !demarche.valeur.is_finite() {
            warn!(expr = %self.expr(), valeur = demarche.valeur, "résultat non fini");
            return Err(ErreurNoyau::NonFini(demarche.valeur));
        }

        let texte = format_resultat(demarche.valeur, &self.reglages);
        self.jetons = vec![Tok::Num(texte)];
        self.demarche = Some(demarche);
        self.just_evaluated = true;

        Ok(self.journal("evaluate", Edition::Appliquee))
    }

    /// Retire le dernier opérateur entier, ou le dernier caractère du numéral.
    pub fn delete_last(&mut self) -> Edition {
        match self.jetons.last_mut() {
            None => return self.journal("delete_last", Edition::Ignoree),
            Some(Tok::Op(_)) => {
                self.jetons.pop();
            }
            Some(Tok::Num(n)) => {
                n.pop();
                // pas de numéral pendant ("-", "1.2e+")
                while n.ends_with(|c: char| matches!(c, 'e' | 'E' | '+' | '-')) {
                    n.pop();
                }
                if n.is_empty() {
                    self.jetons.pop();
                }
            }
        }
        self.journal("delete_last", Edition::Appliquee)
    }

    /// C : vide l’expression. `just_evaluated` n’est pas touché.
    pub fn clear(&mut self) -> Edition {
        if self.jetons.is_empty() {
            return self.journal("clear", Edition::Ignoree);
        }
        self.jetons.clear();
        self.journal("clear", Edition::Appliquee)
    }
}
