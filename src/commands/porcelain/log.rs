use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::CommitHeader;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::CvsResult;

impl Repository {
    /// Print every commit from HEAD back to the first one, newest first
    pub fn log(&self) -> CvsResult<Vec<ObjectId>> {
        self.ensure_exists()?;

        let mut current = match self.refs().resolve_head()? {
            Head::Branch { name, target: None } => {
                self.emit(format_args!("No commits yet on branch {name}"))?;
                return Ok(Vec::new());
            }
            Head::Branch {
                target: Some(oid), ..
            }
            | Head::Detached(oid) => Some(oid),
        };

        let mut history = Vec::new();
        while let Some(commit_id) = current {
            let content = self.database().load_commit_text(&commit_id)?;

            self.emit(format_args!("Commit - {commit_id}"))?;
            self.emit(&content)?;
            self.emit("")?;

            current = CommitHeader::parse(commit_id.as_ref(), &content)?.parent;
            history.push(commit_id);
        }

        Ok(history)
    }
}
