//! Built-in Dockerfile templates
//!
//! Selection is a table lookup keyed by `(label, python variant)`; the
//! variant is part of the key only for the `python` label. Adding a framework
//! means adding a row, not a branch.

use crate::detection::{FrameworkLabel, PythonVariant};
use tracing::debug;

const PYTHON_DEFAULT: &str = r#"FROM python:3.9-slim

WORKDIR /app
COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt
COPY . .
EXPOSE 80
CMD ["python", "main.py"]
"#;

const PYTHON_FLASK: &str = r#"FROM python:3.9-slim

WORKDIR /app
COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt
COPY . .
EXPOSE 5000
ENV FLASK_APP=main.py
CMD ["flask", "run", "--host=0.0.0.0", "--port=5000"]
"#;

const PYTHON_DJANGO: &str = r#"FROM python:3.9-slim

WORKDIR /app
COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt
COPY . .
EXPOSE 8000
CMD ["python", "manage.py", "runserver", "0.0.0.0:8000"]
"#;

const REACT: &str = r#"# Stage 1: Build the React application.
FROM node:14 AS builder
WORKDIR /app
COPY package*.json ./
RUN npm install
COPY . .
RUN npm run build
# Stage 2: Serve the React app using Nginx.
FROM nginx:stable-alpine
COPY --from=builder /app/build /usr/share/nginx/html
EXPOSE 80
CMD ["nginx", "-g", "daemon off;"]
"#;

const STREAMLIT: &str = r#"FROM python:3.9-slim

WORKDIR /app
COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt
COPY . .
EXPOSE 8501
CMD ["streamlit", "run", "streamlit_app.py", "--server.enableCORS=false"]
"#;

const ANGULAR: &str = r#"# Stage 1: Build the Angular application.
FROM node:14 AS builder
WORKDIR /app
COPY package*.json ./
RUN npm install
COPY . .
RUN npm run build --prod
# Stage 2: Serve the Angular app using Nginx.
FROM nginx:alpine
COPY --from=builder /app/dist/app /usr/share/nginx/html
EXPOSE 80
CMD ["nginx", "-g", "daemon off;"]
"#;

const JAVA: &str = r#"FROM openjdk:11-jre-slim

WORKDIR /app
COPY pom.xml .
COPY src ./src
RUN apt-get update && apt-get install -y maven && mvn package
EXPOSE 8080
CMD ["java", "-jar", "target/my-app.jar"]
"#;

const RUBY: &str = r#"FROM ruby:2.7

WORKDIR /app
COPY Gemfile Gemfile.lock ./
RUN bundle install
COPY . .
EXPOSE 4567
CMD ["ruby", "app.rb"]
"#;

const CPP: &str = r#"FROM ubuntu:20.04

RUN apt-get update && apt-get install -y cmake g++ make

WORKDIR /app
COPY . .
RUN cmake . && make
EXPOSE 8080
CMD ["./myapp"]
"#;

/// One row of the template table
#[derive(Debug, Clone, Copy)]
pub struct DockerfileTemplate {
    pub label: FrameworkLabel,
    /// `Some` only for `python` rows
    pub variant: Option<PythonVariant>,
    pub body: &'static str,
}

pub const DOCKERFILE_TEMPLATES: &[DockerfileTemplate] = &[
    DockerfileTemplate {
        label: FrameworkLabel::Python,
        variant: Some(PythonVariant::None),
        body: PYTHON_DEFAULT,
    },
    DockerfileTemplate {
        label: FrameworkLabel::Python,
        variant: Some(PythonVariant::Flask),
        body: PYTHON_FLASK,
    },
    DockerfileTemplate {
        label: FrameworkLabel::Python,
        variant: Some(PythonVariant::Django),
        body: PYTHON_DJANGO,
    },
    DockerfileTemplate {
        label: FrameworkLabel::React,
        variant: None,
        body: REACT,
    },
    DockerfileTemplate {
        label: FrameworkLabel::Streamlit,
        variant: None,
        body: STREAMLIT,
    },
    DockerfileTemplate {
        label: FrameworkLabel::Angular,
        variant: None,
        body: ANGULAR,
    },
    DockerfileTemplate {
        label: FrameworkLabel::Java,
        variant: None,
        body: JAVA,
    },
    DockerfileTemplate {
        label: FrameworkLabel::Ruby,
        variant: None,
        body: RUBY,
    },
    DockerfileTemplate {
        label: FrameworkLabel::Cpp,
        variant: None,
        body: CPP,
    },
    // No Node build stage: fullstack projects get the plain Python image.
    DockerfileTemplate {
        label: FrameworkLabel::Fullstack,
        variant: None,
        body: PYTHON_DEFAULT,
    },
];

/// Renders the Dockerfile body for a label, or `None` for `unknown`
pub fn render_dockerfile(label: FrameworkLabel, variant: PythonVariant) -> Option<String> {
    let key_variant = (label == FrameworkLabel::Python).then_some(variant);

    let template = DOCKERFILE_TEMPLATES
        .iter()
        .find(|t| t.label == label && t.variant == key_variant)?;

    debug!(framework = %label, variant = %variant, "Dockerfile template selected");
    Some(template.body.to_string())
}
