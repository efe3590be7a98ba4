//! Project catalog and the denormalized `collected` cache.
//!
//! The catalog is a fixed seed list of projects whose `collected` field
//! mirrors the ledger fold. [`Catalog::apply`] updates the cache after a
//! successful append using the same clamp-at-zero rule as the fold, so the
//! incremental update and a full replay always agree. The snapshot is
//! persisted as a whole-list overwrite on every change.

use tracing::warn;

use crate::errors::StoreError;
use crate::ledger::Ledger;
use crate::store::{self, KvStore, CATALOG_KEY};
use crate::types::{Project, Transaction, TransactionKind};

pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// The fixed project list the showcase launches with. `collected`
    /// starts at zero and only ever moves through ledger replay.
    pub fn seed() -> Vec<Project> {
        let definitions: [(&str, &str, &str, &str, i64); 8] = [
            (
                "cras-caximba",
                "Implantação do CRAS Caximba",
                "Centro de Referência da Assistência Social voltado ao atendimento da população em situação de vulnerabilidade.",
                "/Implementação CRAS Caximba/Implementação do CRAS Caximba.jpeg",
                3_600_000,
            ),
            (
                "jornada-digital",
                "SMS - JORNADA DIGITAL",
                "Modernização dos serviços de saúde através de tecnologia digital para melhor atendimento.",
                "/SMDC/Projetos.jpeg",
                3_000_000,
            ),
            (
                "escola-circo",
                "Escola de Circo e Marionetes",
                "Projeto cultural para formação artística e desenvolvimento de talentos locais.",
                "/E C M/Escola de circo.jpeg",
                2_500_000,
            ),
            (
                "secretaria-mulher",
                "Secretaria Municipal da Mulher e Igualdade Étnico-Racial",
                "Projetos de empoderamento feminino e promoção da igualdade racial.",
                "/Mulher R/Mulher.jpeg",
                1_800_000,
            ),
            (
                "app-mulheres",
                "Aplicativo Mulheres",
                "Plataforma digital para apoio e proteção às mulheres da cidade.",
                "/APP MULHER/App mulher.jpeg",
                800_000,
            ),
            (
                "meio-ambiente",
                "Secretaria Municipal do Meio Ambiente",
                "Projetos de sustentabilidade e preservação ambiental urbana.",
                "/AMBIENTE/ambiente.jpeg",
                4_200_000,
            ),
            (
                "museu-historia",
                "Novo Museu de História Natural de Curitiba",
                "Construção de moderno espaço cultural e educativo para a cidade.",
                "/Museu/Museu.jpeg",
                15_000_000,
            ),
            (
                "hospital-bairro-novo",
                "Construção do novo Hospital do Bairro Novo",
                "Nova unidade hospitalar para atender a região com excelência.",
                "/Hospital/hospital.jpeg",
                25_000_000,
            ),
        ];

        definitions
            .into_iter()
            .map(|(id, title, description, image, target)| Project {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                image: image.to_string(),
                target,
                collected: 0,
            })
            .collect()
    }

    /// Restore the persisted snapshot, falling back to the seed list when
    /// absent. A malformed snapshot is cleared and reseeded.
    pub fn restore<S: KvStore>(store: &mut S) -> Self {
        let projects = match store::read_json(store, CATALOG_KEY) {
            Ok(Some(projects)) => projects,
            Ok(None) => Self::seed(),
            Err(err) => {
                warn!(%err, "discarding corrupt catalog snapshot");
                store.remove(CATALOG_KEY);
                Self::seed()
            }
        };
        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// Apply an appended ledger entry to the cached balance and persist
    /// the snapshot.
    ///
    /// Uses the same clamp-at-zero rule as the full fold. An entry whose
    /// `project_id` matches no catalog project updates nothing (orphaned
    /// references are tolerated). On a failed write the in-memory value is
    /// rolled back, so memory and store keep agreeing.
    pub fn apply<S: KvStore>(
        &mut self,
        store: &mut S,
        transaction: &Transaction,
    ) -> Result<(), StoreError> {
        let Some(index) = self
            .projects
            .iter()
            .position(|p| p.id == transaction.project_id)
        else {
            return Ok(());
        };

        let previous = self.projects[index].collected;
        self.projects[index].collected = match transaction.kind {
            TransactionKind::Add { .. } => previous + transaction.amount,
            TransactionKind::Remove { .. } => (previous - transaction.amount).max(0),
        };

        if let Err(err) = store::write_json(store, CATALOG_KEY, &self.projects) {
            self.projects[index].collected = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Re-derive every cached balance from the ledger fold.
    ///
    /// The snapshot normally agrees with the fold already; it can lag
    /// when a snapshot write failed after the log write succeeded. Runs
    /// at session start and after a failed [`Catalog::apply`], in memory
    /// only; the next successful write persists the healed snapshot.
    pub fn reconcile(&mut self, ledger: &Ledger) {
        for project in &mut self.projects {
            let fold = ledger.balance_for(&project.id);
            if project.collected != fold {
                warn!(
                    project = %project.id,
                    cached = project.collected,
                    fold,
                    "catalog cache lagged ledger fold; resynchronized"
                );
                project.collected = fold;
            }
        }
    }

    /// Percent of the target reached, for display.
    pub fn progress(project: &Project) -> f64 {
        (project.collected as f64 / project.target as f64) * 100.0
    }
}
