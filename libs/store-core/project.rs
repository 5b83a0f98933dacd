use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

use crate::{StoreError, StoreResult};

pub type ProjectId = u64;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Project {
    /// Assigned by the store on creation, never reused
    pub id: ProjectId,
    pub name: String,
    pub color: String,
    /// Creation time of the record
    pub datetime: DateTime<Utc>,
}

/// Shape accepted by `create_project`; the id is assigned by the store
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ProjectInput {
    pub name: String,
    pub color: String,
    pub datetime: DateTime<Utc>,
}

impl ProjectInput {
    /// Shape check only. Palette membership and any richer constraints are
    /// the job of the form layer upstream.
    pub fn validate(&self) -> StoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(StoreError::ValidationError(
                "project name is a required field".to_owned(),
            ));
        }

        if self.color.trim().is_empty() {
            return Err(StoreError::ValidationError(
                "project color is a required field".to_owned(),
            ));
        }

        Ok(())
    }
}

#[derive(Default, Debug, Deserialize, PartialEq, Clone)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub datetime: Option<DateTime<Utc>>,
}

impl ProjectPatch {
    pub fn set_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn set_color(mut self, color: String) -> Self {
        self.color = Some(color);
        self
    }

    pub fn set_datetime(mut self, datetime: DateTime<Utc>) -> Self {
        self.datetime = Some(datetime);
        self
    }

    pub fn from_project_diff(left: &Project, right: &Project) -> eyre::Result<ProjectPatch> {
        if left.id != right.id {
            return Err(eyre::eyre!("diff between projects with different id"));
        }

        let mut res = ProjectPatch::default();

        if left.name != right.name {
            res = res.set_name(right.name.clone());
        }

        if left.color != right.color {
            res = res.set_color(right.color.clone());
        }

        if left.datetime != right.datetime {
            res = res.set_datetime(right.datetime);
        }

        Ok(res)
    }

    pub fn merge_with_project(self, project: &Project) -> Project {
        Project {
            id: project.id,
            name: self.name.unwrap_or(project.name.clone()),
            color: self.color.unwrap_or(project.color.clone()),
            datetime: self.datetime.unwrap_or(project.datetime),
        }
    }
}
