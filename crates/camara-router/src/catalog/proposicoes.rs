//! Proposições: projetos de lei, resoluções e sua tramitação.

use crate::route::{PathParam, QueryParam, Route};

pub(crate) static ROUTES: &[Route] = &[
    Route {
        path: "/proposicoes",
        upstream_path: "proposicoes",
        category: "Proposições",
        description: "Lista de informações básicas sobre projetos de lei, resoluções, etc.",
        path_params: &[],
        query_params: &[
            QueryParam::int("ano"),
            QueryParam::text("siglaTipo"),
            QueryParam::int("numero"),
            QueryParam::int("idDeputadoAutor"),
        ],
    },
    Route {
        path: "/proposicoes/{id}",
        upstream_path: "proposicoes/{id}",
        category: "Proposições",
        description: "Informações detalhadas sobre uma proposição específica.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/proposicoes/{id}/autores",
        upstream_path: "proposicoes/{id}/autores",
        category: "Proposições",
        description: "Lista pessoas e/ou entidades autoras de uma proposição.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/proposicoes/{id}/relacionadas",
        upstream_path: "proposicoes/{id}/relacionadas",
        category: "Proposições",
        description: "Lista de proposições relacionadas a uma em especial.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/proposicoes/{id}/tramitacoes",
        upstream_path: "proposicoes/{id}/tramitacoes",
        category: "Proposições",
        description: "O histórico de passos na tramitação de uma proposta.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/proposicoes/{id}/votacoes",
        upstream_path: "proposicoes/{id}/votacoes",
        category: "Proposições",
        description: "Votações sobre uma proposição específica.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/proposicoes/{id}/temas",
        upstream_path: "proposicoes/{id}/temas",
        category: "Proposições",
        description: "Apresenta a lista de áreas temáticas com as quais uma proposição se relaciona.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
];
