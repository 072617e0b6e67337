//! Órgãos: comissões e demais órgãos legislativos da Câmara.

use crate::route::{PathParam, QueryParam, Route};

pub(crate) static ROUTES: &[Route] = &[
    Route {
        path: "/orgaos",
        upstream_path: "orgaos",
        category: "Órgãos",
        description: "A lista das comissões e outros órgãos legislativos da Câmara.",
        path_params: &[],
        query_params: &[
            QueryParam::text("sigla"),
            QueryParam::text("dataInicio"),
            QueryParam::text("dataFim"),
        ],
    },
    Route {
        path: "/orgaos/{id}",
        upstream_path: "orgaos/{id}",
        category: "Órgãos",
        description: "Informações detalhadas sobre um órgão da Câmara.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/orgaos/{id}/eventos",
        upstream_path: "orgaos/{id}/eventos",
        category: "Órgãos",
        description: "Eventos ocorridos ou previstos em um órgão.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/orgaos/{id}/membros",
        upstream_path: "orgaos/{id}/membros",
        category: "Órgãos",
        description: "Lista de parlamentares que ocupam cargos em um órgão.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/orgaos/{id}/votacoes",
        upstream_path: "orgaos/{id}/votacoes",
        category: "Órgãos",
        description: "Votações de um órgão.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
];
