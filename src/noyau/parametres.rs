//! Paramètres du quiz (bornes des tirages + garde-fous anti-boucle).
//!
//! Valeurs par défaut = quiz “calcul mental” : feuilles 2..=10, exposants
//! 0..=3, distracteurs à ±5 de la bonne réponse, 10 questions de 5 termes.

/// Nombre de termes par défaut d’une question.
pub const NB_TERMES_DEFAUT: usize = 5;

/// Garde-fou : au-delà, les arbres deviennent illisibles (et la récursion profonde).
pub const NB_TERMES_MAX: usize = 12;

pub const NB_QUESTIONS_DEFAUT: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParametresGeneration {
    /// Bornes (incluses) des feuilles tirées.
    pub feuille_min: i64,
    pub feuille_max: i64,
    /// Exposant tiré dans 0..=exposant_max.
    pub exposant_max: i64,
    /// Essais maximum par niveau avant GenerationEchouee.
    pub essais_max: usize,
}

impl Default for ParametresGeneration {
    fn default() -> Self {
        Self {
            feuille_min: 2,
            feuille_max: 10,
            exposant_max: 3,
            essais_max: 1000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParametresChoix {
    /// Décalage tiré dans -ecart_max..=ecart_max.
    pub ecart_max: i64,
    /// Dénominateurs des distracteurs fractionnaires.
    pub denominateur_min: i64,
    pub denominateur_max: i64,
    /// Tirages maximum par distracteur avant GenerationChoixEchouee.
    pub essais_max: usize,
}

impl Default for ParametresChoix {
    fn default() -> Self {
        Self {
            ecart_max: 5,
            denominateur_min: 2,
            denominateur_max: 10,
            essais_max: 1000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParametresQuiz {
    pub nb_questions: usize,
    pub nb_termes: usize,
    pub generation: ParametresGeneration,
    pub choix: ParametresChoix,
}

impl Default for ParametresQuiz {
    fn default() -> Self {
        Self {
            nb_questions: NB_QUESTIONS_DEFAUT,
            nb_termes: NB_TERMES_DEFAUT,
            generation: ParametresGeneration::default(),
            choix: ParametresChoix::default(),
        }
    }
}

impl ParametresQuiz {
    /// Borne nb_termes dans 1..=NB_TERMES_MAX.
    pub fn avec_nb_termes(mut self, nb_termes: usize) -> Self {
        self.nb_termes = nb_termes.clamp(1, NB_TERMES_MAX);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nb_termes_borne() {
        assert_eq!(ParametresQuiz::default().avec_nb_termes(0).nb_termes, 1);
        assert_eq!(ParametresQuiz::default().avec_nb_termes(3).nb_termes, 3);
        assert_eq!(
            ParametresQuiz::default().avec_nb_termes(500).nb_termes,
            NB_TERMES_MAX
        );
    }
}
