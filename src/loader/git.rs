use crate::error::Result;
use crate::loader::interface::TemplateLoader;
use std::path::Path;
use url::Url;

/// Loader for templates from git repositories.
pub struct GitLoader<S: AsRef<str>> {
    repo: S,
}

impl<S: AsRef<str>> GitLoader<S> {
    /// Creates a new GitLoader instance.
    pub fn new(repo: S) -> Self {
        Self { repo }
    }

    /// Determines if a string represents a git repository URL.
    ///
    /// Supports:
    /// - HTTPS URLs: https://github.com/user/repo
    /// - Git URLs: git://github.com/user/repo
    /// - SSH URLs: git@github.com:user/repo
    /// - SSH URLs with explicit protocol: ssh://git@github.com/user/repo
    pub fn is_git_url(s: &str) -> bool {
        if let Ok(url) = Url::parse(s) {
            return matches!(url.scheme(), "http" | "https" | "git" | "ssh");
        }

        // scp-like form: user@host:path
        let Some((user, rest)) = s.split_once('@') else {
            return false;
        };
        let Some((host, path)) = rest.split_once(':') else {
            return false;
        };
        !user.is_empty()
            && !host.is_empty()
            && host.contains('.')
            && !path.is_empty()
            && path.contains('/')
    }
}

impl<S: AsRef<str>> TemplateLoader for GitLoader<S> {
    /// Clones the repository into `dest`.
    fn load_into(&self, dest: &Path) -> Result<()> {
        let repo_url = self.repo.as_ref();
        log::debug!("Cloning repository '{repo_url}' into '{}'", dest.display());

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, _allowed_types| {
            git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
        });

        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);

        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_opts);
        builder.clone(repo_url, dest)?;
        Ok(())
    }
}

/// Creates a repository in `dir`, stages every file and records one commit.
///
/// Falls back to a fixed author when git has no `user.name`/`user.email`.
pub fn init_repository<P: AsRef<Path>>(dir: P, message: &str) -> Result<git2::Oid> {
    let repo = git2::Repository::init(dir.as_ref())?;

    let mut index = repo.index()?;
    index.add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)?;
    index.write()?;
    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    let signature = match repo.signature() {
        Ok(signature) => signature,
        Err(err) => {
            log::debug!("No git identity configured ({err}); using the KIMU CLI identity");
            git2::Signature::now("KIMU CLI", "kimu-cli@localhost")?
        }
    };

    let oid = repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &[])?;
    Ok(oid)
}
