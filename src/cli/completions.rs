use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    mamba-githook-installer completions bash > ~/.bash_completion.d/mamba-githook-installer\n\n\
                  Generate zsh completions:\n    mamba-githook-installer completions zsh > ~/.zfunc/_mamba-githook-installer\n\n\
                  Generate fish completions:\n    mamba-githook-installer completions fish > ~/.config/fish/completions/mamba-githook-installer.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
