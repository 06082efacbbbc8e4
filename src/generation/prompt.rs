//! Prompts for the AI-assisted artifacts

/// System role sent with every generation request
pub const SYSTEM_ROLE: &str = "You are a helpful assistant that writes configuration files.";

/// Instruction for a compose file built around an existing Dockerfile
pub fn compose_prompt(dockerfile_body: &str) -> String {
    format!(
        "Generate a docker-compose.yml file for a project whose Dockerfile is as follows:\n\n\
         {dockerfile_body}\n\n\
         The compose file should define a service named 'app' that builds the image from the \
         current directory, exposes the appropriate port, and uses default settings. \
         Remember to only generate docker compose content with no extra text."
    )
}

/// Instruction for the README that explains the compose setup
pub fn readme_prompt(compose_body: &str) -> String {
    format!(
        "Based on the following docker-compose.yml content:\n\n\
         {compose_body}\n\n\
         Generate a README (dockerreadme.md) that explains how to build and run the containers \
         and how to build a docker image, including commands for building, starting, and \
         stopping the services."
    )
}
